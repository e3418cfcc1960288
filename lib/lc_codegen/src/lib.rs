//! Emission of the artifacts of classes.
//!
//! For each class the driver opens the interface, implementation and
//! delegating implementation artifacts in turn on a `ClassSink`, and lets
//! the member emitters fill each of them.
mod dispatch;
mod driver;
mod emitter;
pub mod error;
mod member;
pub mod sink;
mod strategy;
pub use crate::dispatch::dispatch_members;
pub use crate::driver::{generate, Stage};
pub use crate::emitter::*;
pub use crate::member::*;
pub use crate::sink::{ArtifactHandle, ArtifactWriter, ClassSink};
pub use crate::strategy::{strategy_for, BodyStrategy};
use anyhow::Result;
use lc_shape::ArtifactPlan;
use lowerclass_core::decl::ClassDeclaration;
use lowerclass_core::names::ClassFullname;
use lowerclass_core::oracle::ResolutionOracle;

/// Result of lowering one class of a batch
#[derive(Debug)]
pub struct ClassOutcome {
    pub class: ClassFullname,
    pub result: Result<ArtifactPlan>,
}

/// Lower each class in turn. A class that fails does not stop the others.
pub fn generate_all<'d>(
    oracle: &dyn ResolutionOracle,
    decls: impl IntoIterator<Item = &'d ClassDeclaration>,
    sink: &mut dyn ClassSink,
    emitters: &Emitters<'_>,
) -> Vec<ClassOutcome> {
    decls
        .into_iter()
        .map(|decl| {
            let result = generate(oracle, decl, sink, emitters);
            match &result {
                Ok(_) => log::debug!("lowered {}", decl.name),
                Err(e) => log::debug!("failed to lower {}: {}", decl.name, e),
            }
            ClassOutcome {
                class: decl.name.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkEvent};
    use lc_index::ClassIndex;
    use lc_shape::ArtifactKind;
    use lowerclass_core::decl::FunctionDecl;
    use lowerclass_core::error;
    use lowerclass_core::names::*;
    use std::cell::RefCell;

    const PROGRAM: &str = r#"
      {
        platform: [
          { name: "lib.Base" },
          { name: "lib.Other" },
        ],
        classes: [
          { name: "demo.Bar", members: [{ kind: "fun", name: "g", abstract: true }] },
          {
            name: "demo.Foo",
            supers: ["Bar"],
            members: [
              { kind: "fun", name: "f", params: [{ name: "x", type: "Int" }], returns: "Bar" },
            ],
          },
          {
            name: "demo.Broken",
            supers: ["lib.Base", "lib.Other"],
            members: [{ kind: "fun", name: "h" }],
          },
          { name: "demo.Plain", members: [{ kind: "var", name: "count", type: "Long" }] },
        ],
      }
    "#;

    /// Records the calls it receives and emits stubs
    #[derive(Default)]
    struct CountingEmitter {
        calls: RefCell<Vec<(ArtifactKind, String)>>,
    }

    impl FunctionEmitter for CountingEmitter {
        fn emit_function(
            &self,
            out: &mut ArtifactWriter<'_>,
            decl: &FunctionDecl,
            kind: ArtifactKind,
        ) -> Result<()> {
            self.calls.borrow_mut().push((kind, decl.name.clone()));
            StubFunctionEmitter.emit_function(out, decl, kind)
        }
    }

    fn class<'a>(index: &'a ClassIndex, name: &str) -> &'a ClassDeclaration {
        index.get_class(&class_fullname(name)).unwrap()
    }

    #[test]
    fn test_three_artifacts_in_order() -> Result<()> {
        let index = ClassIndex::from_json5(PROGRAM)?;
        let counting = CountingEmitter::default();
        let emitters = Emitters {
            property: &StubPropertyEmitter,
            function: &counting,
        };
        let mut sink = RecordingSink::new();
        generate(&index, class(&index, "demo.Foo"), &mut sink, &emitters)?;

        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Open(binary_name("demo/Foo")),
                SinkEvent::Member(binary_name("demo/Foo"), "f".to_string()),
                SinkEvent::Close(binary_name("demo/Foo")),
                SinkEvent::Open(binary_name("demo/Foo$$Impl")),
                SinkEvent::Member(binary_name("demo/Foo$$Impl"), "f".to_string()),
                SinkEvent::Close(binary_name("demo/Foo$$Impl")),
                SinkEvent::Open(binary_name("demo/Foo$$DImpl")),
                SinkEvent::Member(binary_name("demo/Foo$$DImpl"), "f".to_string()),
                SinkEvent::Close(binary_name("demo/Foo$$DImpl")),
            ]
        );
        assert_eq!(
            *counting.calls.borrow(),
            ArtifactKind::ALL
                .into_iter()
                .map(|k| (k, "f".to_string()))
                .collect::<Vec<_>>()
        );

        let bodies = sink
            .artifacts()
            .iter()
            .map(|a| a.members[0].body.clone())
            .collect::<Vec<_>>();
        assert_eq!(
            bodies,
            vec![
                MemberBody::Abstract,
                MemberBody::Direct,
                MemberBody::Delegating {
                    delegate: binary_name("demo/Foo")
                },
            ]
        );
        assert_eq!(sink.artifacts()[0].members[0].descriptor, "(I)Ldemo/Bar;");

        let interface = sink.artifact(&binary_name("demo/Foo")).unwrap();
        assert_eq!(interface.header.interfaces, vec![binary_name("demo/Bar")]);
        let implementation = sink.artifact(&binary_name("demo/Foo$$Impl")).unwrap();
        assert_eq!(implementation.header.superclass, binary_name("demo/Bar$$Impl"));
        assert_eq!(implementation.header.interfaces, vec![binary_name("demo/Foo")]);
        let delegating = sink.artifact(&binary_name("demo/Foo$$DImpl")).unwrap();
        assert_eq!(delegating.header.superclass, binary_name("demo/Bar$$DImpl"));
        Ok(())
    }

    #[test]
    fn test_ambiguous_base_opens_nothing() -> Result<()> {
        let index = ClassIndex::from_json5(PROGRAM)?;
        let mut sink = RecordingSink::new();
        let err = generate(&index, class(&index, "demo.Broken"), &mut sink, &Emitters::stubs())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<error::Error>(),
            Some(error::Error::AmbiguousBase { .. })
        ));
        assert_eq!(sink.open_count(), 0);
        assert!(sink.events().is_empty());
        Ok(())
    }

    #[test]
    fn test_sink_error_aborts_open_artifact() -> Result<()> {
        let index = ClassIndex::from_json5(PROGRAM)?;
        let mut sink = RecordingSink::new().rejecting("getCount");
        let err = generate(&index, class(&index, "demo.Plain"), &mut sink, &Emitters::stubs())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::error::Error>(),
            Some(&crate::error::Error::RejectedMember {
                artifact: binary_name("demo/Plain"),
                member: "getCount".to_string(),
            })
        );
        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Open(binary_name("demo/Plain")),
                SinkEvent::Abort(binary_name("demo/Plain")),
            ]
        );
        assert!(!sink.has_open_artifacts());
        assert!(sink.artifacts().is_empty());
        Ok(())
    }

    #[test]
    fn test_close_error_aborts_artifact() -> Result<()> {
        let index = ClassIndex::from_json5(PROGRAM)?;
        let mut sink = RecordingSink::new().failing_close(binary_name("demo/Foo$$Impl"));
        let err = generate(&index, class(&index, "demo.Foo"), &mut sink, &Emitters::stubs())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::error::Error>(),
            Some(&crate::error::Error::CloseFailed {
                name: binary_name("demo/Foo$$Impl"),
            })
        );
        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Open(binary_name("demo/Foo")),
                SinkEvent::Member(binary_name("demo/Foo"), "f".to_string()),
                SinkEvent::Close(binary_name("demo/Foo")),
                SinkEvent::Open(binary_name("demo/Foo$$Impl")),
                SinkEvent::Member(binary_name("demo/Foo$$Impl"), "f".to_string()),
                SinkEvent::Abort(binary_name("demo/Foo$$Impl")),
            ]
        );
        assert!(!sink.has_open_artifacts());
        assert_eq!(sink.artifacts().len(), 1);
        Ok(())
    }

    #[test]
    fn test_batch_continues_after_failure() -> Result<()> {
        let index = ClassIndex::from_json5(PROGRAM)?;
        let mut sink = RecordingSink::new();
        let outcomes = generate_all(&index, index.classes(), &mut sink, &Emitters::stubs());

        let summary = outcomes
            .iter()
            .map(|o| (o.class.0.as_str(), o.result.is_ok()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("demo.Bar", true),
                ("demo.Foo", true),
                ("demo.Broken", false),
                ("demo.Plain", true),
            ]
        );
        assert_eq!(sink.artifacts().len(), 9);
        assert!(sink
            .artifacts()
            .iter()
            .all(|a| !a.header.name.as_str().starts_with("demo/Broken")));
        Ok(())
    }

    #[test]
    fn test_abstract_function_only_in_interface() -> Result<()> {
        let index = ClassIndex::from_json5(PROGRAM)?;
        let mut sink = RecordingSink::new();
        generate(&index, class(&index, "demo.Bar"), &mut sink, &Emitters::stubs())?;
        let counts = sink
            .artifacts()
            .iter()
            .map(|a| a.members.len())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![1, 0, 0]);
        Ok(())
    }
}
