// ============================================================================
// mkvtree-core/src/report/builder.rs
// ============================================================================
//
// TREE BUILDER: Stack-Based Fold of Classified Lines into a Tree
//
// The builder keeps an open-node stack of (depth, node) pairs, shallowest at
// the bottom. A node is moved into its parent when it is popped, so a node can
// only gain children while it is still on the stack; once popped it is closed.
//
// ATTACHMENT RULES:
// - first marked line, or depth 0: close everything, start a new top-level node
// - deeper than the top: the new node nests under the top
// - same depth or shallower: pop every entry deeper than the line, pop exactly
//   one more (the sibling), and nest under whatever is left on top
//
// The last rule means equal-depth lines end up as siblings because they are
// attached to the same parent one after the other.
//
// AI-ASSISTANT-INFO: Indentation-driven tree builder for mkvinfo reports

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};
use crate::report::line::{ClassifiedLine, classify};
use crate::report::tree::{Node, Tree};

// ---- Standard library imports ----
use std::io::BufRead;

// ============================================================================
// BUILDER
// ============================================================================

/// Incremental tree builder.
///
/// Lines are fed one at a time with [`TreeBuilder::push_line`], which makes it
/// possible to fold a live process stream without buffering the report. After
/// `push_line` returns an error the builder's state is unspecified and it
/// should be discarded.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<(usize, Node)>,
    roots: Vec<Node>,
    started: bool,
    line_no: usize,
    nodes: usize,
    skipped: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one line and folds it into the tree.
    ///
    /// Lines without a depth marker are skipped. Returns
    /// [`CoreError::Structure`] when the line has no open node to attach to.
    pub fn push_line(&mut self, line: &str) -> CoreResult<()> {
        self.line_no += 1;

        let Some(ClassifiedLine { depth, name, value }) = classify(line) else {
            self.skipped += 1;
            return Ok(());
        };
        let node = Node::new(name, value);
        self.nodes += 1;

        if !self.started || depth == 0 {
            self.started = true;
            self.close_all();
            log::trace!("line {}: new top-level node '{}' at depth {}", self.line_no, node.name(), depth);
            self.stack.push((depth, node));
            return Ok(());
        }

        let top_depth = match self.stack.last() {
            Some((top_depth, _)) => *top_depth,
            None => return Err(self.structure_error(depth, &node)),
        };

        if depth <= top_depth {
            while self.stack.last().is_some_and(|(d, _)| *d > depth) {
                self.close_top();
            }
            // What is left on top is no deeper than this line: the sibling.
            self.close_top();
            if self.stack.is_empty() {
                return Err(self.structure_error(depth, &node));
            }
        }

        log::trace!("line {}: node '{}' at depth {}", self.line_no, node.name(), depth);
        self.stack.push((depth, node));
        Ok(())
    }

    /// Closes every open node and returns the finished tree.
    pub fn finish(mut self) -> Tree {
        self.close_all();
        log::debug!(
            "Built report tree: {} nodes, {} top-level entries, {} of {} lines skipped",
            self.nodes,
            self.roots.len(),
            self.skipped,
            self.line_no
        );
        Tree::from_roots(self.roots)
    }

    /// Pops the top entry and appends it to its parent, or to the root list
    /// when it was the bottom of the stack.
    fn close_top(&mut self) {
        if let Some((_, node)) = self.stack.pop() {
            match self.stack.last_mut() {
                Some((_, parent)) => parent.push_child(node),
                None => self.roots.push(node),
            }
        }
    }

    fn close_all(&mut self) {
        while !self.stack.is_empty() {
            self.close_top();
        }
    }

    fn structure_error(&self, depth: usize, node: &Node) -> CoreError {
        log::error!(
            "Report structure broken at line {}: '{}' at depth {} has no open parent",
            self.line_no,
            node.name(),
            depth
        );
        CoreError::Structure {
            line: self.line_no,
            depth,
            name: node.name().to_string(),
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Builds a tree from a sequence of report lines.
///
/// # Examples
///
/// ```rust
/// use mkvtree_core::report::build;
///
/// let tree = build(["+ A track", "  + Track type: video", "  + Track number: 1"]).unwrap();
/// let track = &tree.top_level()[0];
/// assert_eq!(track.children().len(), 2);
/// assert_eq!(track.child_value("Track+type"), Some("video"));
/// ```
pub fn build<I, S>(lines: I) -> CoreResult<Tree>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    for line in lines {
        builder.push_line(line.as_ref())?;
    }
    Ok(builder.finish())
}

/// Builds a tree from report text held in memory.
pub fn parse_str(report: &str) -> CoreResult<Tree> {
    build(report.lines())
}

/// Builds a tree from a reader, one line at a time.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than failing
/// the parse; mkvinfo prints titles and track names in the locale's encoding.
/// I/O errors from the reader are returned as [`CoreError::Io`].
pub fn parse_reader<R: BufRead>(mut reader: R) -> CoreResult<Tree> {
    let mut builder = TreeBuilder::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        builder.push_line(line.trim_end_matches(['\r', '\n']))?;
    }
    Ok(builder.finish())
}
