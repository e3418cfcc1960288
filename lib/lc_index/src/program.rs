use serde::Deserialize;

/// Contents of a program description (`*.json5`)
#[derive(Debug, PartialEq, Default, Deserialize)]
pub struct ProgramDef {
    /// Platform types in addition to the bundled ones
    #[serde(default)]
    pub platform: Vec<PlatformClassDef>,
    #[serde(default)]
    pub classes: Vec<ClassDef>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct PlatformClassDef {
    pub name: String,
    #[serde(default)]
    pub interface: bool,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(default)]
    pub supers: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDef>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberDef {
    Val {
        name: String,
        #[serde(rename = "type")]
        ty: String,
        #[serde(default = "default_true")]
        initialized: bool,
    },
    Var {
        name: String,
        #[serde(rename = "type")]
        ty: String,
        #[serde(default = "default_true")]
        initialized: bool,
    },
    Fun {
        name: String,
        #[serde(default)]
        params: Vec<ParamDef>,
        #[serde(default = "default_returns")]
        returns: String,
        #[serde(default, rename = "abstract")]
        is_abstract: bool,
    },
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct ParamDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

fn default_true() -> bool {
    true
}

fn default_returns() -> String {
    "Unit".to_string()
}
