use crate::names::*;
use crate::ty::JvmType;
use serde::{Deserialize, Serialize};

/// A source-level class, as handed over by the frontend
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: ClassFullname,
    /// Supertypes in the order they are written
    pub supers: Vec<SupertypeRef>,
    /// Members in declaration order
    pub members: Vec<MemberDecl>,
}

/// A supertype as written in the class header (not resolved yet)
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SupertypeRef {
    pub name: String,
}

impl SupertypeRef {
    pub fn new(name: impl Into<String>) -> SupertypeRef {
        SupertypeRef { name: name.into() }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum MemberDecl {
    Property(PropertyDecl),
    Function(FunctionDecl),
}

/// `val` or `var`
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: JvmType,
    /// true for `var`
    pub mutable: bool,
    /// false if the property is declared without a value (ie. abstract)
    pub has_initializer: bool,
}

impl PropertyDecl {
    pub fn val(name: impl Into<String>, ty: JvmType) -> PropertyDecl {
        PropertyDecl {
            name: name.into(),
            ty,
            mutable: false,
            has_initializer: true,
        }
    }

    pub fn var(name: impl Into<String>, ty: JvmType) -> PropertyDecl {
        PropertyDecl {
            mutable: true,
            ..PropertyDecl::val(name, ty)
        }
    }

    pub fn without_initializer(mut self) -> Self {
        self.has_initializer = false;
        self
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub ret: JvmType,
    /// false if the function is declared without a body (ie. abstract)
    pub has_body: bool,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, params: Vec<Param>, ret: JvmType) -> FunctionDecl {
        FunctionDecl {
            name: name.into(),
            params,
            ret,
            has_body: true,
        }
    }

    pub fn without_body(mut self) -> Self {
        self.has_body = false;
        self
    }

    pub fn descriptor(&self) -> String {
        crate::ty::method_descriptor(self.params.iter().map(|p| &p.ty), &self.ret)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: JvmType,
}

pub fn param(name: impl Into<String>, ty: JvmType) -> Param {
    Param {
        name: name.into(),
        ty,
    }
}
