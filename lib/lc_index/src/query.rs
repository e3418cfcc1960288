use crate::indexing::is_class_name;
use crate::ClassIndex;
use anyhow::Result;
use lowerclass_core::decl::*;
use lowerclass_core::error;
use lowerclass_core::names::*;
use lowerclass_core::oracle::*;
use lowerclass_core::supertype::*;
use std::collections::HashSet;

impl ClassIndex {
    /// Find a class or platform type by its full name or, for classes of the
    /// program, by its name relative to the package of `owner`.
    fn lookup(&self, owner: &ClassFullname, name: &str) -> Option<ClassFullname> {
        if !is_class_name(name) {
            return None;
        }
        let full = class_fullname(name);
        if self.class_idx.contains_key(&full) || self.platform.contains_key(&full) {
            return Some(full);
        }
        if owner.package().is_empty() {
            return None;
        }
        let rel = class_fullname(format!("{}.{}", owner.package(), name));
        self.class_idx.contains_key(&rel).then_some(rel)
    }
}

impl ResolutionOracle for ClassIndex {
    fn resolve_class(&self, decl: &ClassDeclaration) -> Result<ClassDescriptor> {
        if self.class_idx.contains_key(&decl.name) {
            Ok(ClassDescriptor {
                fullname: decl.name.clone(),
            })
        } else {
            Err(error::unresolved_class(&decl.name))
        }
    }

    fn resolve_supertype(
        &self,
        owner: &ClassFullname,
        sup: &SupertypeRef,
    ) -> Result<ResolvedSupertype> {
        let Some(name) = self.lookup(owner, &sup.name) else {
            return Err(error::unresolved_supertype(owner, &sup.name));
        };
        let resolved = match self.declaring_source_of(&name) {
            Some(Declaration::Source(decl)) => ResolvedSupertype::source(&decl.name.0),
            Some(Declaration::Platform(pc)) if pc.is_interface => {
                ResolvedSupertype::platform_interface(&pc.fullname.0)
            }
            Some(Declaration::Platform(pc)) => ResolvedSupertype::platform_class(&pc.fullname.0),
            None => return Err(error::unresolved_supertype(owner, &sup.name)),
        };
        Ok(resolved)
    }

    fn declaring_source_of(&self, name: &ClassFullname) -> Option<Declaration<'_>> {
        if let Some(decl) = self.get_class(name) {
            Some(Declaration::Source(decl))
        } else {
            self.platform.get(name).map(Declaration::Platform)
        }
    }

    fn is_interface_like(&self, name: &ClassFullname) -> bool {
        match self.declaring_source_of(name) {
            // Classes of the program are inherited through their interface artifact
            Some(Declaration::Source(_)) => true,
            Some(Declaration::Platform(pc)) => pc.is_interface,
            None => false,
        }
    }

    fn interface_closure_of(&self, platform_class: &ClassFullname) -> Vec<BinaryName> {
        let mut closure = vec![];
        let mut seen = HashSet::new();
        let mut visited = HashSet::new();
        let mut current = self.platform.get(platform_class);
        while let Some(pc) = current {
            if !visited.insert(&pc.fullname) {
                break;
            }
            for iface in &pc.interfaces {
                let name = iface.to_binary_name();
                if seen.insert(name.clone()) {
                    closure.push(name);
                }
            }
            current = pc.superclass.as_ref().and_then(|s| self.platform.get(s));
        }
        closure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r#"
      {
        platform: [
          { name: "demo.lib.Shape", interfaces: ["java.lang.Comparable"] },
          {
            name: "demo.lib.Square",
            superclass: "demo.lib.Shape",
            interfaces: ["java.lang.Cloneable", "java.lang.Comparable"],
          },
        ],
        classes: [
          { name: "demo.Bar", members: [{ kind: "fun", name: "f" }] },
          { name: "demo.Foo", supers: ["Bar", "demo.lib.Square"] },
        ],
      }
    "#;

    fn test_index() -> Result<ClassIndex> {
        ClassIndex::from_json5(PROGRAM)
    }

    #[test]
    fn test_resolve_source_supertype() -> Result<()> {
        let index = test_index()?;
        let foo = class_fullname("demo.Foo");
        let sup = index.resolve_supertype(&foo, &SupertypeRef::new("Bar"))?;
        assert_eq!(sup, ResolvedSupertype::source("demo.Bar"));
        assert_eq!(sup.binary, binary_name("demo/Bar"));
        Ok(())
    }

    #[test]
    fn test_resolve_platform_supertype() -> Result<()> {
        let index = test_index()?;
        let foo = class_fullname("demo.Foo");
        let sq = index.resolve_supertype(&foo, &SupertypeRef::new("demo.lib.Square"))?;
        assert_eq!(sq.kind, SupertypeKind::ConcreteBase);
        assert_eq!(sq.origin, Origin::Platform);
        let r = index.resolve_supertype(&foo, &SupertypeRef::new("java.lang.Runnable"))?;
        assert_eq!(r.kind, SupertypeKind::InterfaceLike);
        Ok(())
    }

    #[test]
    fn test_unresolved_supertype() -> Result<()> {
        let index = test_index()?;
        let foo = class_fullname("demo.Foo");
        let err = index
            .resolve_supertype(&foo, &SupertypeRef::new("Nope"))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<error::Error>(),
            Some(&error::Error::UnresolvedSupertype {
                class: foo,
                name: "Nope".to_string()
            })
        );
        Ok(())
    }

    #[test]
    fn test_malformed_supertype_names() -> Result<()> {
        let index = test_index()?;
        let foo = class_fullname("demo.Foo");
        for name in ["demo/Bar", ".Bar", "Bar.", "demo..Bar", ""] {
            let err = index
                .resolve_supertype(&foo, &SupertypeRef::new(name))
                .unwrap_err();
            assert_eq!(
                err.downcast_ref::<error::Error>(),
                Some(&error::Error::UnresolvedSupertype {
                    class: foo.clone(),
                    name: name.to_string()
                })
            );
        }
        Ok(())
    }

    #[test]
    fn test_interface_closure() -> Result<()> {
        let index = test_index()?;
        let closure = index.interface_closure_of(&class_fullname("demo.lib.Square"));
        assert_eq!(
            closure,
            vec![
                binary_name("java/lang/Cloneable"),
                binary_name("java/lang/Comparable"),
            ]
        );
        let closure = index.interface_closure_of(&class_fullname("java.util.ArrayList"));
        assert_eq!(
            closure,
            vec![
                binary_name("java/util/List"),
                binary_name("java/util/RandomAccess"),
                binary_name("java/lang/Cloneable"),
                binary_name("java/io/Serializable"),
                binary_name("java/util/Collection"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_is_interface_like() -> Result<()> {
        let index = test_index()?;
        assert!(index.is_interface_like(&class_fullname("demo.Bar")));
        assert!(index.is_interface_like(&class_fullname("java.lang.Runnable")));
        assert!(!index.is_interface_like(&class_fullname("demo.lib.Shape")));
        assert!(!index.is_interface_like(&class_fullname("no.Such")));
        Ok(())
    }

    #[test]
    fn test_duplicate_class() {
        let src = r#"{ classes: [{ name: "a.A" }, { name: "a.A" }] }"#;
        let err = ClassIndex::from_json5(src).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::DuplicateClass { .. })
        ));
    }

    #[test]
    fn test_broken_platform() {
        let src = r#"{ platform: [{ name: "a.B", superclass: "java.lang.Runnable" }] }"#;
        let err = ClassIndex::from_json5(src).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::BrokenProgram { .. })
        ));
    }

    #[test]
    fn test_members_are_indexed() -> Result<()> {
        let index = test_index()?;
        let bar = index.get_class(&class_fullname("demo.Bar")).unwrap();
        assert_eq!(
            bar.members,
            vec![MemberDecl::Function(FunctionDecl::new(
                "f",
                vec![],
                lowerclass_core::ty::JvmType::Unit
            ))]
        );
        Ok(())
    }
}
