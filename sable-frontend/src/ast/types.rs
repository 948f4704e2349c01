//! Type annotations
//!
//! A type is a base name followed by zero or more `*` pointer markers.
//! Primitive names are ordinary identifiers to the lexer and are only
//! classified here.

use sable_common::{HasSpan, SourceSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Void,
}

impl PrimitiveType {
    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        let primitive = match name {
            "i8" => PrimitiveType::I8,
            "i16" => PrimitiveType::I16,
            "i32" => PrimitiveType::I32,
            "i64" => PrimitiveType::I64,
            "u8" => PrimitiveType::U8,
            "u16" => PrimitiveType::U16,
            "u32" => PrimitiveType::U32,
            "u64" => PrimitiveType::U64,
            "f32" => PrimitiveType::F32,
            "f64" => PrimitiveType::F64,
            "bool" => PrimitiveType::Bool,
            "void" => PrimitiveType::Void,
            _ => return None,
        };
        Some(primitive)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Void => "void",
        }
    }
}

/// Base of a type annotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    Primitive(PrimitiveType),
    Named(String),
}

impl TypeName {
    pub fn from_identifier(name: &str) -> TypeName {
        match PrimitiveType::from_name(name) {
            Some(primitive) => TypeName::Primitive(primitive),
            None => TypeName::Named(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeName::Primitive(primitive) => primitive.name(),
            TypeName::Named(name) => name,
        }
    }
}

/// A type annotation such as `i32` or `Node**`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Type {
    pub base: TypeName,
    pub pointer_depth: u32,
    pub span: SourceSpan,
}

impl Type {
    pub fn is_pointer(&self) -> bool {
        self.pointer_depth > 0
    }
}

/// Types compare by base name and pointer depth only
impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.pointer_depth == other.pointer_depth
    }
}

impl HasSpan for Type {
    fn span(&self) -> SourceSpan {
        self.span
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base.as_str(), "*".repeat(self.pointer_depth as usize))
    }
}
