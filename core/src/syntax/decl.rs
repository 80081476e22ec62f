#![deny(missing_docs)]

//! # Struct Declarations
//!
//! Owned field lists lifted out of a tree-sitter `struct_type` node, and the
//! printer that turns them back into aligned Go source.

use super::node_text;
use super::types::TypeExpr;
use tree_sitter::Node;

/// One field declaration inside a struct type.
///
/// Raw text is kept for the tag, the trailing comment and the doc lines so
/// that printing an unmodified node reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    /// Declared names; `X, Y int` has two. Empty for embedded fields.
    pub names: Vec<String>,
    /// Field type. Embedded `*T` is stored as a pointer type.
    pub ty: TypeExpr,
    /// Tag literal including its delimiters.
    pub tag: Option<String>,
    /// Trailing same-line comment including its markers.
    pub comment: Option<String>,
    /// Comment lines directly above the field.
    pub docs: Vec<String>,
}

/// The field list of a struct type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructDecl {
    /// Field declarations in source order.
    pub fields: Vec<FieldNode>,
    /// Comment lines after the last field.
    pub footer: Vec<String>,
}

impl FieldNode {
    /// A single-name field without tag, comment or docs.
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            tag: None,
            comment: None,
            docs: Vec::new(),
        }
    }

    /// Whether this is an embedded (anonymous) field.
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }

    fn from_declaration(node: Node<'_>, src: &str) -> Self {
        let mut cursor = node.walk();
        let names: Vec<String> = node
            .children_by_field_name("name", &mut cursor)
            .map(|name| node_text(name, src).to_string())
            .collect();

        let mut ty = node
            .child_by_field_name("type")
            .map(|ty| TypeExpr::from_node(ty, src))
            .unwrap_or_else(TypeExpr::placeholder);

        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();

        // Embedded `*T`: the star is a direct token of the declaration.
        if names.is_empty() && children.iter().any(|c| !c.is_named() && c.kind() == "*") {
            ty = TypeExpr::Pointer(Box::new(ty));
        }

        let comment = children
            .iter()
            .find(|c| c.kind() == "comment")
            .map(|c| node_text(*c, src).to_string());

        Self {
            names,
            ty,
            tag: node
                .child_by_field_name("tag")
                .map(|tag| node_text(tag, src).to_string()),
            comment,
            docs: Vec::new(),
        }
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(4);
        if !self.names.is_empty() {
            cells.push(self.names.join(", "));
        }
        cells.push(self.ty.to_string());
        if let Some(tag) = &self.tag {
            cells.push(tag.clone());
        }
        if let Some(comment) = &self.comment {
            cells.push(comment.clone());
        }
        cells
    }
}

impl StructDecl {
    /// Lifts a tree-sitter `struct_type` node.
    ///
    /// A comment that starts on the row where the previous field ends is that
    /// field's trailing comment; any other comment becomes a doc line of the
    /// next field, or part of the footer.
    pub(crate) fn from_struct_type(node: Node<'_>, src: &str) -> Self {
        let mut cursor = node.walk();
        let list = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == "field_declaration_list");
        let Some(list) = list else {
            return Self::default();
        };

        let mut fields: Vec<FieldNode> = Vec::new();
        let mut pending = Vec::new();
        let mut last_row = None;

        let mut cursor = list.walk();
        for child in list.named_children(&mut cursor) {
            match child.kind() {
                "field_declaration" => {
                    let mut field = FieldNode::from_declaration(child, src);
                    field.docs = std::mem::take(&mut pending);
                    last_row = Some(child.end_position().row);
                    fields.push(field);
                }
                "comment" => {
                    let text = node_text(child, src).to_string();
                    let trailing = last_row == Some(child.start_position().row);
                    match fields.last_mut() {
                        Some(field) if trailing && field.comment.is_none() => {
                            field.comment = Some(text);
                        }
                        _ => pending.push(text),
                    }
                }
                _ => {}
            }
        }

        Self {
            fields,
            footer: pending,
        }
    }

    /// Prints the struct type over multiple lines.
    ///
    /// `indent` is the indentation of the line holding the `struct` keyword;
    /// fields are indented one tab deeper. Name, type, tag and comment cells
    /// are aligned in columns the way gofmt aligns them.
    pub fn render(&self, indent: &str) -> String {
        let mut code = String::from("struct {\n");
        let rows: Vec<Vec<String>> = self.fields.iter().map(FieldNode::cells).collect();
        let lines = align_rows(&rows);

        for (field, line) in self.fields.iter().zip(lines) {
            for doc in &field.docs {
                code.push_str(&format!("{}\t{}\n", indent, doc));
            }
            code.push_str(&format!("{}\t{}\n", indent, line));
        }
        for doc in &self.footer {
            code.push_str(&format!("{}\t{}\n", indent, doc));
        }

        code.push_str(indent);
        code.push('}');
        code
    }

    /// Prints the struct type on a single line, dropping comments.
    pub fn render_inline(&self) -> String {
        if self.fields.is_empty() {
            return "struct{}".to_string();
        }
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|field| {
                let mut cells = Vec::new();
                if !field.names.is_empty() {
                    cells.push(field.names.join(", "));
                }
                cells.push(field.ty.to_string());
                if let Some(tag) = &field.tag {
                    cells.push(tag.clone());
                }
                cells.join(" ")
            })
            .collect();
        format!("struct{{ {} }}", fields.join("; "))
    }
}

/// Pads cells into columns.
///
/// A cell only takes part in alignment when another cell follows it on the
/// same row; a column block is a run of consecutive rows where that holds.
fn align_rows(rows: &[Vec<String>]) -> Vec<String> {
    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![vec![0usize; max_cols]; rows.len()];

    for col in 0..max_cols {
        let mut start = 0;
        while start < rows.len() {
            if rows[start].len() <= col + 1 {
                start += 1;
                continue;
            }
            let mut end = start;
            while end < rows.len() && rows[end].len() > col + 1 {
                end += 1;
            }
            let width = rows[start..end]
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0);
            for row_widths in &mut widths[start..end] {
                row_widths[col] = width;
            }
            start = end;
        }
    }

    rows.iter()
        .zip(widths)
        .map(|(row, row_widths)| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i + 1 < row.len() {
                    let pad = row_widths[i].saturating_sub(cell.chars().count()) + 1;
                    line.push_str(&" ".repeat(pad));
                }
            }
            line
        })
        .collect()
}
