//! Counting how many UI nodes a composable emits.
//!
//! The direct count looks at a composable's own top-level statements. The
//! [`EmissionCounter`] then adds, for each call to another composable in the
//! same file, that composable's count, and repeats until the numbers stop
//! changing.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::kotlin::{chain_root, Call, Function};
use crate::resolver::ConfigResolver;
use crate::syntax::{kinds, Node, NodeId};

/// Composables known to emit exactly one UI node.
pub const KNOWN_EMITTERS: &[&str] = &[
    "AlertDialog",
    "AndroidView",
    "BasicText",
    "BasicTextField",
    "Box",
    "BoxWithConstraints",
    "Button",
    "Canvas",
    "Card",
    "Checkbox",
    "CircularProgressIndicator",
    "Column",
    "ConstraintLayout",
    "DropdownMenu",
    "DropdownMenuItem",
    "ElevatedButton",
    "ElevatedCard",
    "ExtendedFloatingActionButton",
    "FilledTonalButton",
    "FloatingActionButton",
    "HorizontalDivider",
    "HorizontalPager",
    "Icon",
    "IconButton",
    "IconToggleButton",
    "Image",
    "LazyColumn",
    "LazyHorizontalGrid",
    "LazyRow",
    "LazyVerticalGrid",
    "LazyVerticalStaggeredGrid",
    "LinearProgressIndicator",
    "ListItem",
    "ModalBottomSheet",
    "NavigationBar",
    "NavigationBarItem",
    "NavigationRail",
    "OutlinedButton",
    "OutlinedCard",
    "OutlinedTextField",
    "RadioButton",
    "Row",
    "Scaffold",
    "Slider",
    "SnackbarHost",
    "Spacer",
    "Surface",
    "Switch",
    "Tab",
    "TabRow",
    "Text",
    "TextButton",
    "TextField",
    "TopAppBar",
    "VerticalDivider",
    "VerticalPager",
];

/// Decides which calls emit content.
#[derive(Debug, Clone, Default)]
pub struct ContentEmitters {
    extra: HashSet<String>,
    denylist: HashSet<String>,
}

fn is_numbered_spacer(name: &str) -> bool {
    name.strip_prefix("Spacer")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

impl ContentEmitters {
    /// Built-ins plus `extra`, minus `denylist`.
    #[must_use]
    pub fn new(extra: HashSet<String>, denylist: HashSet<String>) -> Self {
        Self { extra, denylist }
    }

    /// Reads `contentEmitters` and `contentEmittersDenylist`.
    #[must_use]
    pub fn from_config(config: &ConfigResolver<'_>) -> Self {
        Self::new(
            config.get_set("contentEmitters", &[]),
            config.get_set("contentEmittersDenylist", &[]),
        )
    }

    /// Whether a composable of this name is a known emitter.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        !self.denylist.contains(name)
            && (KNOWN_EMITTERS.contains(&name) || is_numbered_spacer(name) || self.extra.contains(name))
    }

    /// Whether the call emits a UI node.
    ///
    /// Besides known emitters, any upper-case call that is handed a
    /// `Modifier` chain (positionally or as `modifier = ...`) is assumed to
    /// emit, since modifiers only make sense on a layout node.
    #[must_use]
    pub fn emits(&self, call: &Call<'_>) -> bool {
        let Some(name) = call.name() else {
            return false;
        };
        if self.denylist.contains(name) || call.receiver().is_some() {
            return false;
        }
        if self.is_known(name) {
            return true;
        }
        name.starts_with(char::is_uppercase)
            && call.arguments().iter().any(|arg| {
                arg.name() == Some("modifier")
                    || arg.expression().is_some_and(|value| {
                        let root = chain_root(value);
                        root.kind() == kinds::IDENTIFIER
                            && matches!(root.original_text(), "Modifier" | "modifier")
                    })
            })
    }

    /// Emissions of one statement: a call counts 1, a loop whose body emits
    /// counts 2, `if`/`when` count their largest branch.
    #[must_use]
    pub fn statement_count(&self, statement: Node<'_>) -> usize {
        match statement.kind() {
            kinds::CALL_EXPRESSION => {
                Call::from_node(statement).map_or(0, |call| usize::from(self.emits(&call)))
            }
            kinds::IF_EXPRESSION => statement
                .named_children()
                .skip(1)
                .map(|branch| self.branch_count(branch))
                .max()
                .unwrap_or(0),
            kinds::WHEN_EXPRESSION => statement
                .children_of_kind(kinds::WHEN_ENTRY)
                .filter_map(|entry| entry.named_children().last())
                .map(|branch| self.branch_count(branch))
                .max()
                .unwrap_or(0),
            kinds::FOR_STATEMENT | kinds::WHILE_STATEMENT | kinds::DO_WHILE_STATEMENT => {
                let body = statement
                    .children_of_kind(kinds::BLOCK)
                    .next()
                    .or_else(|| statement.named_children().last());
                if body.is_some_and(|b| self.branch_count(b) > 0) {
                    2
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    fn branch_count(&self, branch: Node<'_>) -> usize {
        if branch.kind() == kinds::BLOCK {
            self.block_count(branch)
        } else {
            self.statement_count(branch)
        }
    }

    /// Sum of [`statement_count`](Self::statement_count) over a block.
    #[must_use]
    pub fn block_count(&self, block: Node<'_>) -> usize {
        block.named_children().map(|s| self.statement_count(s)).sum()
    }

    /// Direct emissions of a function, counting an expression body as a
    /// single statement.
    #[must_use]
    pub fn direct_count(&self, function: &Function<'_>) -> usize {
        if let Some(block) = function.block_body() {
            self.block_count(block)
        } else {
            function
                .expression_body()
                .map_or(0, |expr| self.statement_count(expr))
        }
    }
}

/// Emission counts keyed by function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionMap {
    counts: HashMap<NodeId, usize>,
}

impl EmissionMap {
    /// Count for a function, zero if unknown.
    #[must_use]
    pub fn get(&self, function: &Function<'_>) -> usize {
        self.counts.get(&function.node().id()).copied().unwrap_or(0)
    }

    /// Number of functions with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Fixpoint over the composables of one file.
pub struct EmissionCounter<'t, 'e> {
    emitters: &'e ContentEmitters,
    components: Vec<Function<'t>>,
    direct: Vec<usize>,
    by_name: HashMap<&'t str, Vec<usize>>,
}

impl<'t, 'e> EmissionCounter<'t, 'e> {
    /// Prepares counting for `components`; only block bodies are counted.
    #[must_use]
    pub fn new(components: Vec<Function<'t>>, emitters: &'e ContentEmitters) -> Self {
        let direct = components
            .iter()
            .map(|f| f.block_body().map_or(0, |block| emitters.block_count(block)))
            .collect();
        let mut by_name: HashMap<&'t str, Vec<usize>> = HashMap::new();
        for (index, function) in components.iter().enumerate() {
            if let Some(name) = function.name() {
                by_name.entry(name).or_default().push(index);
            }
        }
        Self {
            emitters,
            components,
            direct,
            by_name,
        }
    }

    /// Every `@Composable` function in `root`, in document order.
    #[must_use]
    pub fn components_in(root: Node<'t>) -> Vec<Function<'t>> {
        let mut components: Vec<Function<'t>> = root
            .find_descendants(kinds::FUNCTION_DECLARATION)
            .filter_map(Function::from_node)
            .filter(Function::is_composable)
            .collect();
        components.sort_by_key(|f| f.node().start_byte());
        components
    }

    /// The components being counted.
    #[must_use]
    pub fn components(&self) -> &[Function<'t>] {
        &self.components
    }

    /// Direct counts only.
    #[must_use]
    pub fn seed(&self) -> EmissionMap {
        EmissionMap {
            counts: self
                .components
                .iter()
                .zip(&self.direct)
                .map(|(f, &count)| (f.node().id(), count))
                .collect(),
        }
    }

    fn callee_count(&self, call: &Call<'_>, current: &EmissionMap) -> usize {
        if call.receiver().is_some() {
            return 0;
        }
        call.name()
            .and_then(|name| self.by_name.get(name))
            .map_or(0, |indices| {
                indices
                    .iter()
                    .map(|&i| current.get(&self.components[i]))
                    .max()
                    .unwrap_or(0)
            })
    }

    /// What a top-level call adds on top of the direct count.
    ///
    /// A call the seed already counted as one emission (a same-file
    /// composable passed a modifier) contributes only what its callee emits
    /// beyond that one.
    fn indirect_count(&self, call: &Call<'_>, current: &EmissionMap) -> usize {
        if call.name().is_some_and(|n| self.emitters.is_known(n)) {
            return 0;
        }
        let callee = self.callee_count(call, current);
        if self.emitters.emits(call) {
            callee.saturating_sub(1)
        } else {
            callee
        }
    }

    /// One refinement pass: direct count plus the current counts of
    /// same-file composables called as top-level statements.
    #[must_use]
    pub fn refine(&self, current: &EmissionMap) -> EmissionMap {
        let counts = self
            .components
            .iter()
            .zip(&self.direct)
            .map(|(function, &direct)| {
                let indirect: usize = function
                    .statements()
                    .into_iter()
                    .filter_map(Call::from_node)
                    .map(|call| self.indirect_count(&call, current))
                    .sum();
                (function.node().id(), direct + indirect)
            })
            .collect();
        EmissionMap { counts }
    }

    /// Refines from the seed until stable, for at most one pass per
    /// component. Mutually recursive composables can keep growing; the
    /// last map is returned in that case.
    #[must_use]
    pub fn resolve(&self) -> EmissionMap {
        let mut current = self.seed();
        for _ in 0..self.components.len() {
            let next = self.refine(&current);
            if next == current {
                return current;
            }
            current = next;
        }
        if !self.components.is_empty() {
            warn!(
                components = self.components.len(),
                "Emission counts did not stabilise; composables may call each other recursively"
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTree;

    fn counts(source: &str, emitters: &ContentEmitters) -> (Vec<usize>, Vec<usize>) {
        let tree = SyntaxTree::parse(source).expect("parse");
        let components = EmissionCounter::components_in(tree.root());
        let counter = EmissionCounter::new(components, emitters);
        let seed = counter.seed();
        let resolved = counter.resolve();
        let seed_counts = counter.components().iter().map(|f| seed.get(f)).collect();
        let final_counts = counter.components().iter().map(|f| resolved.get(f)).collect();
        (seed_counts, final_counts)
    }

    #[test]
    fn direct_counts_follow_control_flow() {
        let source = r"
@Composable
fun Single() { Text(a) }

@Composable
fun Two() {
    Text(a)
    Image(b)
}

@Composable
fun Branches() {
    if (flag) {
        Text(a)
        Text(b)
    } else {
        Text(c)
    }
}

@Composable
fun Looping() {
    for (item in items) { Text(item) }
}

@Composable
fun Nested() {
    Column {
        Text(a)
        Text(b)
    }
}

@Composable
fun Heuristic(modifier: Modifier) {
    MyCard(modifier = modifier)
    helper(x)
}
";
        let (seed, _) = counts(source, &ContentEmitters::default());
        assert_eq!(seed, vec![1, 2, 2, 2, 1, 1]);
    }

    #[test]
    fn indirect_emissions_propagate_through_calls() {
        let source = r"
@Composable
fun Leaf() {
    Text(a)
    Text(b)
}

@Composable
fun Middle() { Leaf() }

@Composable
fun Top() { Middle() }

@Composable
fun Quiet() { remember { 1 } }
";
        let (seed, resolved) = counts(source, &ContentEmitters::default());
        assert_eq!(seed, vec![2, 0, 0, 0]);
        assert_eq!(resolved, vec![2, 2, 2, 0]);
    }

    #[test]
    fn modifier_heuristic_calls_are_not_counted_twice() {
        let source = r"
@Composable
fun MyCard(modifier: Modifier) {
    Card(modifier) { Text(a) }
}

@Composable
fun Screen(modifier: Modifier) {
    MyCard(modifier = modifier)
}

@Composable
fun TwoLines(modifier: Modifier) {
    Text(a)
    Text(b)
}

@Composable
fun Wrapper(modifier: Modifier) {
    TwoLines(modifier = modifier)
}
";
        let (seed, resolved) = counts(source, &ContentEmitters::default());
        assert_eq!(seed, vec![1, 1, 2, 1]);
        assert_eq!(resolved, vec![1, 1, 2, 2]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let source = r"
@Composable
fun A() { Text(a) }

@Composable
fun B() {
    A()
    A()
}
";
        let tree = SyntaxTree::parse(source).expect("parse");
        let emitters = ContentEmitters::default();
        let counter = EmissionCounter::new(EmissionCounter::components_in(tree.root()), &emitters);
        let resolved = counter.resolve();
        assert_eq!(counter.refine(&resolved), resolved);
        assert_eq!(counter.resolve(), resolved);
    }

    #[test]
    fn recursion_terminates() {
        let source = r"
@Composable
fun Ping() {
    Text(a)
    Pong()
}

@Composable
fun Pong() { Ping() }
";
        let (seed, resolved) = counts(source, &ContentEmitters::default());
        assert_eq!(seed, vec![1, 0]);
        assert!(resolved[0] >= 1 && resolved[1] >= 1);
    }

    #[test]
    fn configuration_adds_and_removes_emitters() {
        let emitters = ContentEmitters::new(
            HashSet::from(["Banner".to_owned()]),
            HashSet::from(["Text".to_owned()]),
        );
        assert!(emitters.is_known("Banner"));
        assert!(!emitters.is_known("Text"));
        assert!(emitters.is_known("Spacer12"));
        assert!(!emitters.is_known("SpacerX"));
    }
}
