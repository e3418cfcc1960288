use crate::error;
use crate::program::*;
use crate::ClassIndex;
use anyhow::Result;
use lowerclass_core::decl::*;
use lowerclass_core::names::*;
use lowerclass_core::supertype::PlatformClass;
use lowerclass_core::ty::JvmType;
use std::collections::{HashMap, HashSet};

impl ClassIndex {
    /// Build the index of a program. Platform types of the program replace
    /// bundled ones of the same name.
    pub fn create(program: ProgramDef) -> Result<ClassIndex> {
        let mut platform = HashMap::new();
        for def in crate::bundled_platform()?.into_iter().chain(program.platform) {
            let pc = platform_class(def)?;
            platform.insert(pc.fullname.clone(), pc);
        }
        check_platform(&platform)?;

        let mut names = HashSet::new();
        for def in &program.classes {
            let name = checked_name(&def.name)?;
            if !names.insert(name.clone()) || platform.contains_key(&name) {
                return Err(error::duplicate_class(&def.name));
            }
        }

        let mut classes = vec![];
        let mut class_idx = HashMap::new();
        for def in program.classes {
            let decl = index_class(&names, def)?;
            class_idx.insert(decl.name.clone(), classes.len());
            classes.push(decl);
        }
        check_inheritance(&classes, &class_idx, &names)?;
        log::debug!(
            "indexed {} classes ({} platform types)",
            classes.len(),
            platform.len()
        );
        Ok(ClassIndex {
            classes,
            class_idx,
            platform,
        })
    }
}

/// Whether `s` can be the dotted name of a class (eg. `demo.Foo`)
pub(crate) fn is_class_name(s: &str) -> bool {
    !s.is_empty() && !s.contains('/') && s.split('.').all(|part| !part.is_empty())
}

fn checked_name(s: &str) -> Result<ClassFullname> {
    if is_class_name(s) {
        Ok(class_fullname(s))
    } else {
        Err(error::broken_program(format!("invalid class name `{}'", s)))
    }
}

fn platform_class(def: PlatformClassDef) -> Result<PlatformClass> {
    let fullname = checked_name(&def.name)?;
    let superclass = if def.interface {
        None
    } else {
        match def.superclass {
            Some(s) => Some(checked_name(&s)?),
            None if def.name == "java.lang.Object" => None,
            None => Some(class_fullname("java.lang.Object")),
        }
    };
    let interfaces = def
        .interfaces
        .iter()
        .map(|s| checked_name(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(PlatformClass {
        fullname,
        is_interface: def.interface,
        superclass,
        interfaces,
    })
}

/// Check that the platform types refer to each other consistently
fn check_platform(platform: &HashMap<ClassFullname, PlatformClass>) -> Result<()> {
    for pc in platform.values() {
        if let Some(sup) = &pc.superclass {
            match platform.get(sup) {
                Some(x) if x.is_interface => {
                    return Err(error::broken_program(format!(
                        "superclass of {} must be a class but {} is an interface",
                        pc.fullname, sup
                    )))
                }
                Some(_) => (),
                None => {
                    return Err(error::broken_program(format!(
                        "unknown superclass {} of {}",
                        sup, pc.fullname
                    )))
                }
            }
        }
        for iface in &pc.interfaces {
            match platform.get(iface) {
                Some(x) if x.is_interface => (),
                Some(_) => {
                    return Err(error::broken_program(format!(
                        "{} implements {} which is not an interface",
                        pc.fullname, iface
                    )))
                }
                None => {
                    return Err(error::broken_program(format!(
                        "unknown interface {} of {}",
                        iface, pc.fullname
                    )))
                }
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Check that no class of the program inherits from itself, directly or
/// through other classes of the program
fn check_inheritance(
    classes: &[ClassDeclaration],
    class_idx: &HashMap<ClassFullname, usize>,
    names: &HashSet<ClassFullname>,
) -> Result<()> {
    let mut visits = HashMap::new();
    let mut path = vec![];
    for decl in classes {
        visit_supers(classes, class_idx, names, decl, &mut visits, &mut path)?;
    }
    Ok(())
}

fn visit_supers<'a>(
    classes: &'a [ClassDeclaration],
    class_idx: &HashMap<ClassFullname, usize>,
    names: &HashSet<ClassFullname>,
    decl: &'a ClassDeclaration,
    visits: &mut HashMap<&'a ClassFullname, Visit>,
    path: &mut Vec<&'a ClassFullname>,
) -> Result<()> {
    match visits.get(&decl.name) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = path.iter().position(|n| *n == &decl.name).unwrap_or(0);
            let cycle = path[start..]
                .iter()
                .chain(std::iter::once(&&decl.name))
                .map(|n| n.0.as_str())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(error::broken_program(format!("cyclic inheritance: {}", cycle)));
        }
        None => (),
    }
    visits.insert(&decl.name, Visit::InProgress);
    path.push(&decl.name);
    for sup in &decl.supers {
        if !is_class_name(&sup.name) {
            // Reported as an unresolved supertype when the class is lowered
            continue;
        }
        let found = source_class_named(names, &decl.name, &sup.name)
            .and_then(|n| class_idx.get(&n));
        if let Some(i) = found {
            visit_supers(classes, class_idx, names, &classes[*i], visits, path)?;
        }
    }
    path.pop();
    visits.insert(&decl.name, Visit::Done);
    Ok(())
}

fn index_class(names: &HashSet<ClassFullname>, def: ClassDef) -> Result<ClassDeclaration> {
    let name = class_fullname(def.name);
    let mut members = vec![];
    for m in def.members {
        let member = match m {
            MemberDef::Val {
                name: pname,
                ty,
                initialized,
            } => MemberDecl::Property(PropertyDecl {
                ty: resolve_type(names, &name, &ty)?,
                name: pname,
                mutable: false,
                has_initializer: initialized,
            }),
            MemberDef::Var {
                name: pname,
                ty,
                initialized,
            } => MemberDecl::Property(PropertyDecl {
                ty: resolve_type(names, &name, &ty)?,
                name: pname,
                mutable: true,
                has_initializer: initialized,
            }),
            MemberDef::Fun {
                name: fname,
                params,
                returns,
                is_abstract,
            } => {
                let params = params
                    .into_iter()
                    .map(|p| Ok(param(p.name, resolve_type(names, &name, &p.ty)?)))
                    .collect::<Result<Vec<_>>>()?;
                MemberDecl::Function(FunctionDecl {
                    name: fname,
                    params,
                    ret: resolve_type(names, &name, &returns)?,
                    has_body: !is_abstract,
                })
            }
        };
        members.push(member);
    }
    Ok(ClassDeclaration {
        name,
        supers: def.supers.into_iter().map(SupertypeRef::new).collect(),
        members,
    })
}

/// Resolve a type name written in a member of `owner`.
/// Classes of the program are referred to through their interface artifact.
fn resolve_type(names: &HashSet<ClassFullname>, owner: &ClassFullname, s: &str) -> Result<JvmType> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("Array<").and_then(|x| x.strip_suffix('>')) {
        return Ok(JvmType::array(resolve_type(names, owner, inner)?));
    }
    if let Some(t) = JvmType::primitive(s) {
        return Ok(t);
    }
    match s {
        "" => Err(error::broken_program(format!("empty type name in {}", owner))),
        "String" => Ok(JvmType::object("java/lang/String")),
        "Any" => Ok(JvmType::object("java/lang/Object")),
        _ if !is_class_name(s) || s.contains('<') => Err(error::broken_program(format!(
            "invalid type name `{}' in {}",
            s, owner
        ))),
        _ => {
            let name = source_class_named(names, owner, s).unwrap_or_else(|| class_fullname(s));
            Ok(JvmType::Object(name.interface_name()))
        }
    }
}

/// Find a class of the program by its full name or by its name relative to
/// the package of `owner`.
pub(crate) fn source_class_named(
    names: &HashSet<ClassFullname>,
    owner: &ClassFullname,
    s: &str,
) -> Option<ClassFullname> {
    let full = class_fullname(s);
    if names.contains(&full) {
        return Some(full);
    }
    if owner.package().is_empty() {
        return None;
    }
    let rel = class_fullname(format!("{}.{}", owner.package(), s));
    names.contains(&rel).then_some(rel)
}
