//! Node kind names of the `tree-sitter-kotlin-ng` grammar used by the linter.

#![allow(missing_docs)]

pub const SOURCE_FILE: &str = "source_file";
pub const ERROR: &str = "ERROR";
pub const LINE_COMMENT: &str = "line_comment";
pub const BLOCK_COMMENT: &str = "block_comment";

pub const PACKAGE_HEADER: &str = "package_header";
pub const IMPORT: &str = "import";
pub const QUALIFIED_IDENTIFIER: &str = "qualified_identifier";
pub const FILE_ANNOTATION: &str = "file_annotation";

pub const CLASS_DECLARATION: &str = "class_declaration";
pub const OBJECT_DECLARATION: &str = "object_declaration";
pub const COMPANION_OBJECT: &str = "companion_object";
pub const CLASS_BODY: &str = "class_body";
pub const FUNCTION_DECLARATION: &str = "function_declaration";
pub const ANONYMOUS_FUNCTION: &str = "anonymous_function";
pub const PROPERTY_DECLARATION: &str = "property_declaration";
pub const PROPERTY_DELEGATE: &str = "property_delegate";
pub const VARIABLE_DECLARATION: &str = "variable_declaration";
pub const MULTI_VARIABLE_DECLARATION: &str = "multi_variable_declaration";
pub const TYPE_ALIAS: &str = "type_alias";

pub const MODIFIERS: &str = "modifiers";
pub const ANNOTATION: &str = "annotation";
pub const CONSTRUCTOR_INVOCATION: &str = "constructor_invocation";
pub const VISIBILITY_MODIFIER: &str = "visibility_modifier";
pub const MEMBER_MODIFIER: &str = "member_modifier";
pub const FUNCTION_MODIFIER: &str = "function_modifier";
pub const INHERITANCE_MODIFIER: &str = "inheritance_modifier";
pub const PLATFORM_MODIFIER: &str = "platform_modifier";
pub const CLASS_MODIFIER: &str = "class_modifier";

pub const FUNCTION_VALUE_PARAMETERS: &str = "function_value_parameters";
pub const PARAMETER: &str = "parameter";
pub const FUNCTION_BODY: &str = "function_body";
pub const BLOCK: &str = "block";

pub const USER_TYPE: &str = "user_type";
pub const NULLABLE_TYPE: &str = "nullable_type";
pub const PARENTHESIZED_TYPE: &str = "parenthesized_type";
pub const FUNCTION_TYPE: &str = "function_type";
pub const TYPE_MODIFIERS: &str = "type_modifiers";
pub const TYPE_ARGUMENTS: &str = "type_arguments";

pub const IDENTIFIER: &str = "identifier";
pub const CALL_EXPRESSION: &str = "call_expression";
pub const NAVIGATION_EXPRESSION: &str = "navigation_expression";
pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
pub const VALUE_ARGUMENTS: &str = "value_arguments";
pub const VALUE_ARGUMENT: &str = "value_argument";
pub const ANNOTATED_LAMBDA: &str = "annotated_lambda";
pub const LAMBDA_LITERAL: &str = "lambda_literal";
pub const LAMBDA_PARAMETERS: &str = "lambda_parameters";
pub const STRING_LITERAL: &str = "string_literal";
pub const STRING_CONTENT: &str = "string_content";
pub const NUMBER_LITERAL: &str = "number_literal";
pub const THIS_EXPRESSION: &str = "this_expression";

pub const IF_EXPRESSION: &str = "if_expression";
pub const WHEN_EXPRESSION: &str = "when_expression";
pub const WHEN_ENTRY: &str = "when_entry";
pub const FOR_STATEMENT: &str = "for_statement";
pub const WHILE_STATEMENT: &str = "while_statement";
pub const DO_WHILE_STATEMENT: &str = "do_while_statement";
pub const RETURN_EXPRESSION: &str = "return_expression";
pub const ASSIGNMENT: &str = "assignment";
pub const INDEX_EXPRESSION: &str = "index_expression";
pub const CALLABLE_REFERENCE: &str = "callable_reference";
pub const FLOAT_LITERAL: &str = "float_literal";
pub const BINARY_EXPRESSION: &str = "binary_expression";
pub const INFIX_EXPRESSION: &str = "infix_expression";
pub const ANNOTATED_EXPRESSION: &str = "annotated_expression";
pub const UNARY_EXPRESSION: &str = "unary_expression";

pub const PARAMETER_MODIFIERS: &str = "parameter_modifiers";
pub const PARAMETER_MODIFIER: &str = "parameter_modifier";
pub const FUNCTION_TYPE_PARAMETERS: &str = "function_type_parameters";
pub const TYPE_PROJECTION: &str = "type_projection";
pub const PRIMARY_CONSTRUCTOR: &str = "primary_constructor";
pub const CLASS_PARAMETERS: &str = "class_parameters";
pub const CLASS_PARAMETER: &str = "class_parameter";
pub const WHEN_SUBJECT: &str = "when_subject";
