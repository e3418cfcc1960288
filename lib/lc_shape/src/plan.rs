use crate::artifact::*;
use crate::hierarchy::ClassShape;
use lowerclass_core::names::*;
use lowerclass_core::supertype::ClassDescriptor;
use serde::{Deserialize, Serialize};

/// Headers of the three artifacts of a class
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ArtifactPlan {
    pub class: ClassFullname,
    pub shape: ClassShape,
    pub interface: ArtifactHeader,
    pub implementation: ArtifactHeader,
    pub delegating: ArtifactHeader,
}

impl ArtifactPlan {
    pub fn header(&self, kind: ArtifactKind) -> &ArtifactHeader {
        match kind {
            ArtifactKind::Interface => &self.interface,
            ArtifactKind::Implementation => &self.implementation,
            ArtifactKind::DelegatingImplementation => &self.delegating,
        }
    }

    /// Headers in emission order
    pub fn headers(&self) -> impl Iterator<Item = &ArtifactHeader> + '_ {
        ArtifactKind::ALL.into_iter().map(|k| self.header(k))
    }
}

impl std::fmt::Display for ArtifactPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "class {}", self.class)?;
        for header in self.headers() {
            writeln!(f, "  {}", header)?;
        }
        Ok(())
    }
}

/// Derive the artifact headers of a class from its shape
pub fn plan(descriptor: &ClassDescriptor, shape: ClassShape) -> ArtifactPlan {
    let interface = ArtifactHeader {
        kind: ArtifactKind::Interface,
        name: descriptor.interface_name(),
        version: V1_6,
        flags: AccessFlags::PUBLIC | AccessFlags::INTERFACE | AccessFlags::ABSTRACT,
        superclass: universal_root(),
        interfaces: shape.interface_names(),
    };
    let implementation = impl_header(descriptor, &shape, ArtifactKind::Implementation);
    let delegating = impl_header(descriptor, &shape, ArtifactKind::DelegatingImplementation);
    ArtifactPlan {
        class: descriptor.fullname.clone(),
        shape,
        interface,
        implementation,
        delegating,
    }
}

fn impl_header(
    descriptor: &ClassDescriptor,
    shape: &ClassShape,
    kind: ArtifactKind,
) -> ArtifactHeader {
    ArtifactHeader {
        kind,
        name: kind.artifact_name(&descriptor.fullname),
        version: V1_6,
        flags: AccessFlags::PUBLIC,
        superclass: impl_superclass(shape, kind),
        interfaces: vec![descriptor.interface_name()],
    }
}

/// The concrete base if any. Otherwise the same kind of artifact of the
/// first class of the program among the supertypes (an arbitrary but stable
/// choice), or the universal root.
fn impl_superclass(shape: &ClassShape, kind: ArtifactKind) -> BinaryName {
    if let Some(base) = &shape.superclass {
        return base.clone();
    }
    match shape.first_source_interface() {
        Some(ancestor) => kind.artifact_name(ancestor),
        None => universal_root(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::ShapeInterface;
    use indexmap::IndexMap;

    fn descriptor(name: &str) -> ClassDescriptor {
        ClassDescriptor {
            fullname: class_fullname(name),
        }
    }

    fn shape(superclass: Option<&str>, interfaces: &[(&str, Option<&str>)]) -> ClassShape {
        let interfaces = interfaces
            .iter()
            .map(|(bin, src)| {
                let origin = match src {
                    Some(s) => ShapeInterface::Source(class_fullname(*s)),
                    None => ShapeInterface::Platform,
                };
                (binary_name(*bin), origin)
            })
            .collect::<IndexMap<_, _>>();
        ClassShape {
            superclass: superclass.map(binary_name),
            interfaces,
        }
    }

    #[test]
    fn test_plain_class() {
        let p = plan(&descriptor("demo.Foo"), shape(None, &[]));
        assert_eq!(p.interface.superclass, universal_root());
        assert!(p.interface.interfaces.is_empty());
        assert_eq!(p.implementation.superclass, universal_root());
        assert_eq!(p.delegating.superclass, universal_root());
        assert_eq!(p.implementation.interfaces, vec![binary_name("demo/Foo")]);
    }

    #[test]
    fn test_fallback_to_first_source_interface() {
        let s = shape(
            None,
            &[
                ("java/lang/Runnable", None),
                ("demo/Bar", Some("demo.Bar")),
                ("demo/Baz", Some("demo.Baz")),
            ],
        );
        let p = plan(&descriptor("demo.Foo"), s);
        assert_eq!(p.implementation.superclass, binary_name("demo/Bar$$Impl"));
        assert_eq!(p.delegating.superclass, binary_name("demo/Bar$$DImpl"));
        assert_eq!(
            p.interface.interfaces,
            vec![
                binary_name("java/lang/Runnable"),
                binary_name("demo/Bar"),
                binary_name("demo/Baz"),
            ]
        );
    }

    #[test]
    fn test_platform_interface_only() {
        let p = plan(&descriptor("demo.Task"), shape(None, &[("java/lang/Runnable", None)]));
        assert_eq!(p.implementation.superclass, universal_root());
        assert_eq!(p.interface.interfaces, vec![binary_name("java/lang/Runnable")]);
    }

    #[test]
    fn test_concrete_base_wins() {
        let s = shape(Some("lib/Base"), &[("demo/Bar", Some("demo.Bar"))]);
        let p = plan(&descriptor("demo.Foo"), s);
        assert_eq!(p.implementation.superclass, binary_name("lib/Base"));
        assert_eq!(p.delegating.superclass, binary_name("lib/Base"));
    }

    #[test]
    fn test_headers() {
        let p = plan(&descriptor("demo.Foo"), shape(None, &[]));
        let names = p.headers().map(|h| h.name.clone()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                binary_name("demo/Foo"),
                binary_name("demo/Foo$$Impl"),
                binary_name("demo/Foo$$DImpl"),
            ]
        );
        assert_eq!(p.interface.flags.0, 0x0601);
        assert_eq!(p.implementation.flags, AccessFlags::PUBLIC);
        assert!(p.headers().all(|h| h.version == V1_6));
    }
}
