//! [`TemplateForest`] implementation for the Tera engine.
//!
//! A [`Tera`] instance is the forest: every registered template is a named
//! tree, `{% include "name" %}` is an invocation, `{% if %}` (with its `elif`
//! and `else` arms) is a conditional and `{% for %}` (with its `else` arm) is a
//! loop. `{% block %}` and `{% filter %}` sections are containers. Macros,
//! raw sections, comments and expressions are opaque.
//!
//! Tera renders blocks from a table of block definitions copied out of the AST
//! at parse time. After text inside a block is edited,
//! [`TemplateForest::refresh`] copies the edited blocks back into that table
//! and rebuilds the inheritance chains of every template, so the edit also
//! reaches templates that extend the edited one.
//!
//! Tera keeps templates in a hash map; [`TemplateForest::names`] sorts them so
//! enumeration order is deterministic.

use std::collections::HashMap;

use tera::ast::{Block, Node};
use tera::{Context, Tera};

use super::{NodeView, NodeViewMut, TemplateForest, TemplateNode};

impl TemplateNode for Node {
    fn view(&self) -> NodeView<'_, Self> {
        match self {
            Node::Text(text) => NodeView::Text(text),
            Node::If(branch, _) => {
                let mut arms: Vec<&[Node]> =
                    branch.conditions.iter().map(|(_, _, body)| body.as_slice()).collect();
                if let Some((_, body)) = &branch.otherwise {
                    arms.push(body);
                }
                NodeView::Conditional(arms)
            }
            Node::Forloop(_, forloop, _) => NodeView::Loop {
                body: &forloop.body,
                else_body: forloop.empty_body.as_deref(),
            },
            Node::Block(_, block, _) => NodeView::Container(&block.body),
            Node::FilterSection(_, section, _) => NodeView::Container(&section.body),
            Node::Include(_, names, _) => {
                NodeView::Invocation(names.iter().map(String::as_str).collect())
            }
            _ => NodeView::Opaque,
        }
    }

    fn view_mut(&mut self) -> NodeViewMut<'_, Self> {
        match self {
            Node::Text(text) => NodeViewMut::Text(text),
            Node::If(branch, _) => {
                let mut arms: Vec<&mut [Node]> = branch
                    .conditions
                    .iter_mut()
                    .map(|(_, _, body)| body.as_mut_slice())
                    .collect();
                if let Some((_, body)) = branch.otherwise.as_mut() {
                    arms.push(body.as_mut_slice());
                }
                NodeViewMut::Conditional(arms)
            }
            Node::Forloop(_, forloop, _) => NodeViewMut::Loop {
                body: forloop.body.as_mut_slice(),
                else_body: forloop.empty_body.as_deref_mut(),
            },
            Node::Block(_, block, _) => NodeViewMut::Container(block.body.as_mut_slice()),
            Node::FilterSection(_, section, _) => {
                NodeViewMut::Container(section.body.as_mut_slice())
            }
            _ => NodeViewMut::Opaque,
        }
    }
}

impl TemplateForest for Tera {
    type Node = Node;
    type Data = Context;
    type Error = tera::Error;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(self.clone())
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.get_template_names().map(str::to_string).collect();
        names.sort();
        names
    }

    fn execute(&self, name: &str, data: &Context) -> Result<Vec<u8>, Self::Error> {
        self.render(name, data).map(String::into_bytes)
    }

    fn redefine(&mut self, definitions: Vec<(String, String)>) -> Result<(), Self::Error> {
        self.add_raw_templates(definitions)
    }

    fn nodes(&self, name: &str) -> Option<&[Node]> {
        self.templates.get(name).map(|template| template.ast.as_slice())
    }

    fn nodes_mut(&mut self, name: &str) -> Option<&mut [Node]> {
        self.templates.get_mut(name).map(|template| template.ast.as_mut_slice())
    }

    fn refresh(&mut self, name: &str) -> Result<(), Self::Error> {
        let Some(template) = self.templates.get_mut(name) else {
            return Ok(());
        };
        if template.blocks.is_empty() {
            return Ok(());
        }

        let mut blocks = HashMap::new();
        collect_blocks(&template.ast, &mut blocks);
        template.blocks = blocks;
        self.build_inheritance_chains()
    }
}

/// Blocks defined at the top level of `nodes` or nested in other blocks, the
/// same set Tera registers when it parses a template.
fn collect_blocks(nodes: &[Node], blocks: &mut HashMap<String, Block>) {
    for node in nodes {
        if let Node::Block(_, block, _) = node {
            blocks.insert(block.name.clone(), block.clone());
            collect_blocks(&block.body, blocks);
        }
    }
}
