#![deny(missing_docs)]

//! # Type Expressions
//!
//! An owned model of Go type expressions. Rendering through `Display` yields
//! canonical gofmt spacing, so `map[string] []int` and `map[string][]int`
//! produce the same text.

use super::decl::StructDecl;
use super::{collapse_ws, new_parser, node_text};
use std::fmt::Display;
use tree_sitter::Node;

/// Identifier used in place of type text that does not parse.
pub const PLACEHOLDER: &str = "error";

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// A Go type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A named type, optionally package-qualified and instantiated (`pkg.Page[T]`).
    Named {
        /// Name including the package qualifier, if any.
        name: String,
        /// Generic type arguments.
        args: Vec<TypeExpr>,
    },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T`, with `...` for implicit lengths.
    Array {
        /// Length expression as written.
        len: String,
        /// Element type.
        elem: Box<TypeExpr>,
    },
    /// `map[K]V`
    Map {
        /// Key type.
        key: Box<TypeExpr>,
        /// Value type.
        value: Box<TypeExpr>,
    },
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan {
        /// Direction.
        dir: ChanDir,
        /// Element type.
        elem: Box<TypeExpr>,
    },
    /// `(T)`
    Paren(Box<TypeExpr>),
    /// An anonymous struct type.
    Struct(StructDecl),
    /// An interface type; each entry is one method or embedded element.
    Interface(Vec<String>),
    /// Any other type (function types, constraints), whitespace-collapsed.
    Verbatim(String),
}

impl TypeExpr {
    /// A plain named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// The placeholder identifier substituted for unparsable type text.
    pub fn placeholder() -> Self {
        TypeExpr::named(PLACEHOLDER)
    }

    /// Parses standalone type text such as `map[string][]*User`.
    ///
    /// The text is parsed in the context `var x <text>`. Text that does not
    /// form exactly one type yields [`TypeExpr::placeholder`].
    pub fn parse_text(text: &str) -> Self {
        let src = format!("package temp\nvar x {}\n", text);
        match parse_var_type(&src) {
            Some(ty) => ty,
            None => {
                tracing::warn!(type_text = %text, "Unparsable type text, using placeholder");
                TypeExpr::placeholder()
            }
        }
    }

    /// Converts a tree-sitter type node.
    pub(crate) fn from_node(node: Node<'_>, src: &str) -> Self {
        match node.kind() {
            "type_identifier" | "qualified_type" => {
                TypeExpr::named(node_text(node, src).split_whitespace().collect::<String>())
            }
            "generic_type" => generic_from_node(node, src),
            "pointer_type" => TypeExpr::Pointer(Box::new(first_type_child(node, src))),
            "slice_type" => TypeExpr::Slice(Box::new(field_type(node, "element", src))),
            "array_type" => TypeExpr::Array {
                len: node
                    .child_by_field_name("length")
                    .map(|len| collapse_ws(node_text(len, src)))
                    .unwrap_or_default(),
                elem: Box::new(field_type(node, "element", src)),
            },
            "implicit_length_array_type" => TypeExpr::Array {
                len: "...".into(),
                elem: Box::new(field_type(node, "element", src)),
            },
            "map_type" => TypeExpr::Map {
                key: Box::new(field_type(node, "key", src)),
                value: Box::new(field_type(node, "value", src)),
            },
            "channel_type" => TypeExpr::Chan {
                dir: chan_dir(node),
                elem: Box::new(field_type(node, "value", src)),
            },
            "parenthesized_type" => TypeExpr::Paren(Box::new(first_type_child(node, src))),
            "struct_type" => TypeExpr::Struct(StructDecl::from_struct_type(node, src)),
            "interface_type" => {
                let mut cursor = node.walk();
                let members = node
                    .named_children(&mut cursor)
                    .filter(|child| child.kind() != "comment")
                    .map(|child| collapse_ws(node_text(child, src)))
                    .collect();
                TypeExpr::Interface(members)
            }
            "type_elem" | "constraint_elem" if node.named_child_count() == 1 => {
                first_type_child(node, src)
            }
            _ => TypeExpr::Verbatim(collapse_ws(node_text(node, src))),
        }
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Named { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                    write!(f, "[{}]", args.join(", "))?;
                }
                Ok(())
            }
            TypeExpr::Pointer(inner) => write!(f, "*{}", inner),
            TypeExpr::Slice(elem) => write!(f, "[]{}", elem),
            TypeExpr::Array { len, elem } => write!(f, "[{}]{}", len, elem),
            TypeExpr::Map { key, value } => write!(f, "map[{}]{}", key, value),
            TypeExpr::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {}", elem),
                ChanDir::Send => write!(f, "chan<- {}", elem),
                ChanDir::Recv => write!(f, "<-chan {}", elem),
            },
            TypeExpr::Paren(inner) => write!(f, "({})", inner),
            TypeExpr::Struct(decl) => write!(f, "{}", decl.render_inline()),
            TypeExpr::Interface(members) if members.is_empty() => write!(f, "interface{{}}"),
            TypeExpr::Interface(members) => write!(f, "interface{{ {} }}", members.join("; ")),
            TypeExpr::Verbatim(text) => write!(f, "{}", text),
        }
    }
}

fn parse_var_type(src: &str) -> Option<TypeExpr> {
    let mut parser = new_parser().ok()?;
    let tree = parser.parse(src, None)?;
    let root = tree.root_node();
    if root.has_error() {
        return None;
    }

    let spec = find_descendant(root, "var_spec")?;
    if spec.child_by_field_name("value").is_some() {
        return None;
    }
    let ty = spec.child_by_field_name("type")?;
    // Trailing declarations after the type mean the text was more than one type.
    if ty.end_byte() != src.trim_end().len() {
        return None;
    }
    Some(TypeExpr::from_node(ty, src))
}

fn find_descendant<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| find_descendant(child, kind))
}

fn generic_from_node(node: Node<'_>, src: &str) -> TypeExpr {
    let base = node
        .child_by_field_name("type")
        .or_else(|| node.named_child(0))
        .map(|base| node_text(base, src).split_whitespace().collect::<String>())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let args = node
        .child_by_field_name("type_arguments")
        .or_else(|| {
            let mut cursor = node.walk();
            let found = node
                .named_children(&mut cursor)
                .find(|child| child.kind() == "type_arguments");
            found
        })
        .map(|list| {
            let mut cursor = list.walk();
            let args: Vec<TypeExpr> = list
                .named_children(&mut cursor)
                .filter(|child| child.kind() != "comment")
                .map(|child| TypeExpr::from_node(child, src))
                .collect();
            args
        })
        .unwrap_or_default();

    TypeExpr::Named { name: base, args }
}

fn field_type(node: Node<'_>, field: &str, src: &str) -> TypeExpr {
    node.child_by_field_name(field)
        .map(|child| TypeExpr::from_node(child, src))
        .unwrap_or_else(TypeExpr::placeholder)
}

fn first_type_child(node: Node<'_>, src: &str) -> TypeExpr {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    child
        .map(|child| TypeExpr::from_node(child, src))
        .unwrap_or_else(TypeExpr::placeholder)
}

fn chan_dir(node: Node<'_>) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind())
        .collect();

    match tokens.as_slice() {
        ["<-", ..] => ChanDir::Recv,
        _ if tokens.contains(&"<-") => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(text: &str) -> String {
        TypeExpr::parse_text(text).to_string()
    }

    #[test]
    fn test_basic_and_qualified() {
        assert_eq!(TypeExpr::parse_text("int64"), TypeExpr::named("int64"));
        assert_eq!(round_trip("time.Time"), "time.Time");
    }

    #[test]
    fn test_compound_types() {
        assert_eq!(round_trip("[]string"), "[]string");
        assert_eq!(round_trip("*User"), "*User");
        assert_eq!(round_trip("map[string][]int"), "map[string][]int");
        assert_eq!(round_trip("map[string]interface{}"), "map[string]interface{}");
        assert_eq!(round_trip("[4]byte"), "[4]byte");
        assert_eq!(round_trip("[]*models.Order"), "[]*models.Order");
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(round_trip("map[ string ] [] int"), "map[string][]int");
    }

    #[test]
    fn test_channels() {
        assert_eq!(round_trip("chan int"), "chan int");
        assert_eq!(round_trip("chan<- int"), "chan<- int");
        assert_eq!(round_trip("<-chan error"), "<-chan error");
    }

    #[test]
    fn test_generic_instantiation() {
        assert_eq!(round_trip("Page[User]"), "Page[User]");
        assert_eq!(round_trip("pkg.Pair[string, int]"), "pkg.Pair[string, int]");
    }

    #[test]
    fn test_anonymous_struct_and_func() {
        assert_eq!(round_trip("struct{}"), "struct{}");
        assert_eq!(round_trip("struct { A int }"), "struct{ A int }");
        assert_eq!(round_trip("func(int) error"), "func(int) error");
    }

    #[test]
    fn test_unparsable_text_degrades_to_placeholder() {
        assert_eq!(TypeExpr::parse_text("map[string"), TypeExpr::placeholder());
        assert_eq!(TypeExpr::parse_text(""), TypeExpr::placeholder());
        assert_eq!(TypeExpr::parse_text("int = 5"), TypeExpr::placeholder());
    }
}
