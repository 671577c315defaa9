//! Template engine abstraction.
//!
//! The extraction core never talks to a concrete template engine. It works
//! through [`TemplateForest`], a small capability surface over a collection of
//! named template trees, and [`TemplateNode`], which exposes each engine node
//! as one of six kinds:
//!
//! | Kind | Meaning | Recursed into |
//! |------|---------|---------------|
//! | [`NodeView::Text`] | literal template text | no (leaf) |
//! | [`NodeView::Conditional`] | `if` with its alternative arms | every arm, in order |
//! | [`NodeView::Loop`] | loop body plus optional else/empty body | body, then else body |
//! | [`NodeView::Container`] | named or filtered section rendered in place | its body |
//! | [`NodeView::Invocation`] | call of another named tree | no |
//! | [`NodeView::Opaque`] | anything else | no |
//!
//! Engine-specific kinds the core does not understand map to `Opaque` and are
//! passed through untouched.
//!
//! The crate ships an implementation for Tera in [`tera_engine`].

pub mod tera_engine;

use std::error::Error;

/// Read-only view of a single template node.
#[derive(Debug)]
pub enum NodeView<'a, N> {
    /// Literal text emitted verbatim.
    Text(&'a str),
    /// A conditional. Arms are ordered: the primary body first, then any
    /// else-if bodies, then the else body when present.
    Conditional(Vec<&'a [N]>),
    /// A loop with its body and optional else (empty-collection) body.
    Loop {
        body: &'a [N],
        else_body: Option<&'a [N]>,
    },
    /// A section whose body renders where it stands, such as an overridable
    /// block or a filtered section.
    Container(&'a [N]),
    /// An invocation of other named trees. Engines that allow fallback lists
    /// report every candidate name.
    Invocation(Vec<&'a str>),
    /// Any other node kind.
    Opaque,
}

/// Mutable view of a single template node, used for in-place text splicing.
#[derive(Debug)]
pub enum NodeViewMut<'a, N> {
    Text(&'a mut String),
    Conditional(Vec<&'a mut [N]>),
    Loop {
        body: &'a mut [N],
        else_body: Option<&'a mut [N]>,
    },
    Container(&'a mut [N]),
    /// Invocations and every other kind. Nothing inside is editable.
    Opaque,
}

/// A node type the extraction core can traverse.
pub trait TemplateNode: Sized {
    /// Classify this node for read-only traversal.
    fn view(&self) -> NodeView<'_, Self>;

    /// Classify this node for in-place editing.
    fn view_mut(&mut self) -> NodeViewMut<'_, Self>;
}

/// A collection of named template trees sharing one namespace.
///
/// Implementations must guarantee that a value returned by
/// [`try_clone`](Self::try_clone) shares no mutable state with its source:
/// editing the clone's nodes or redefining its trees never changes what the
/// source renders.
///
/// Some engines refuse structural edits after a tree has been executed. The
/// extraction core therefore never edits a forest it has executed; it keeps
/// one clone for execution and a separate clone for rewriting.
pub trait TemplateForest: Sized {
    /// Node type of the engine's parsed trees.
    type Node: TemplateNode;
    /// Data value handed to tree execution.
    type Data: ?Sized;
    /// Engine error type, surfaced unchanged to callers.
    type Error: Error + Send + Sync + 'static;

    /// Deep-copy the forest.
    fn try_clone(&self) -> Result<Self, Self::Error>;

    /// Names of all trees, in a stable enumeration order.
    fn names(&self) -> Vec<String>;

    /// Execute the named tree against `data` and return its full output.
    fn execute(&self, name: &str, data: &Self::Data) -> Result<Vec<u8>, Self::Error>;

    /// Parse `(name, source)` pairs in the engine's own syntax, adding new
    /// trees or replacing existing ones.
    fn redefine(&mut self, definitions: Vec<(String, String)>) -> Result<(), Self::Error>;

    /// Top-level nodes of the named tree, if it exists.
    fn nodes(&self, name: &str) -> Option<&[Self::Node]>;

    /// Mutable top-level nodes of the named tree, if it exists.
    fn nodes_mut(&mut self, name: &str) -> Option<&mut [Self::Node]>;

    /// Rebuild whatever the engine derives from the named tree's nodes after
    /// they were edited through [`nodes_mut`](Self::nodes_mut).
    ///
    /// Engines that render straight from the nodes have nothing to do.
    fn refresh(&mut self, _name: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Visit every node in `nodes` depth-first, descending into conditional arms,
/// loop bodies and container bodies. Invocation targets are not followed.
pub fn walk<N, F>(nodes: &[N], visit: &mut F)
where
    N: TemplateNode,
    F: FnMut(&NodeView<'_, N>),
{
    for node in nodes {
        let view = node.view();
        visit(&view);
        match view {
            NodeView::Conditional(arms) => {
                for arm in arms {
                    walk(arm, visit);
                }
            }
            NodeView::Loop {
                body,
                else_body,
            } => {
                walk(body, visit);
                if let Some(else_body) = else_body {
                    walk(else_body, visit);
                }
            }
            NodeView::Container(body) => walk(body, visit),
            NodeView::Text(_) | NodeView::Invocation(_) | NodeView::Opaque => {}
        }
    }
}

/// Depth-first search for the first text node accepted by `edit`.
///
/// `edit` is offered each text node in traversal order and returns `true`
/// once it has modified one; the search stops there. Returns whether any
/// node was edited.
pub fn edit_first_text<N, F>(nodes: &mut [N], edit: &mut F) -> bool
where
    N: TemplateNode,
    F: FnMut(&mut String) -> bool,
{
    for node in nodes {
        let done = match node.view_mut() {
            NodeViewMut::Text(text) => edit(text),
            NodeViewMut::Conditional(arms) => {
                arms.into_iter().any(|arm| edit_first_text(arm, edit))
            }
            NodeViewMut::Loop {
                body,
                else_body,
            } => {
                edit_first_text(body, edit)
                    || else_body.is_some_and(|else_body| edit_first_text(else_body, edit))
            }
            NodeViewMut::Container(body) => edit_first_text(body, edit),
            NodeViewMut::Opaque => false,
        };
        if done {
            return true;
        }
    }
    false
}
