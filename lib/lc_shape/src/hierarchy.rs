use anyhow::Result;
use indexmap::IndexMap;
use lowerclass_core::decl::ClassDeclaration;
use lowerclass_core::error;
use lowerclass_core::names::*;
use lowerclass_core::oracle::ResolutionOracle;
use lowerclass_core::supertype::*;
use serde::{Deserialize, Serialize};

/// Supertypes of a class, rearranged for a single-inheritance runtime.
///
/// Computed per class and thrown away after its artifacts are planned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassShape {
    /// The platform class to inherit from, if any
    pub superclass: Option<BinaryName>,
    /// Interfaces in discovery order, without duplicates
    pub interfaces: IndexMap<BinaryName, ShapeInterface>,
}

/// Where an entry of the interface set comes from
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ShapeInterface {
    /// Interface artifact of a class of the program
    Source(ClassFullname),
    /// Platform interface, named directly
    Platform,
}

/// Shapes are equal only if their interfaces are listed in the same order
impl PartialEq for ClassShape {
    fn eq(&self, other: &Self) -> bool {
        self.superclass == other.superclass && self.interfaces.iter().eq(other.interfaces.iter())
    }
}

impl Eq for ClassShape {}

impl ClassShape {
    pub fn interface_names(&self) -> Vec<BinaryName> {
        self.interfaces.keys().cloned().collect()
    }

    /// The first supertype that is a class of the program. Used as the
    /// ancestor of the implementation artifacts when there is no concrete
    /// base.
    pub fn first_source_interface(&self) -> Option<&ClassFullname> {
        self.interfaces.values().find_map(|x| match x {
            ShapeInterface::Source(name) => Some(name),
            ShapeInterface::Platform => None,
        })
    }

    /// Add `sup` to the shape of `class`
    fn add(
        mut self,
        oracle: &dyn ResolutionOracle,
        class: &ClassFullname,
        sup: ResolvedSupertype,
    ) -> Result<ClassShape> {
        match (sup.origin, sup.kind) {
            (Origin::Platform, SupertypeKind::ConcreteBase) => {
                if let Some(first) = &self.superclass {
                    return Err(error::ambiguous_base(class, first, &sup.binary));
                }
                for iface in oracle.interface_closure_of(&sup.fullname) {
                    self.push_interface(iface, ShapeInterface::Platform);
                }
                self.superclass = Some(sup.binary);
            }
            (Origin::Platform, SupertypeKind::InterfaceLike) => {
                self.push_interface(sup.binary, ShapeInterface::Platform);
            }
            (Origin::SourceDefined, _) => {
                let name = sup.fullname.interface_name();
                self.push_interface(name, ShapeInterface::Source(sup.fullname));
            }
        }
        Ok(self)
    }

    fn push_interface(&mut self, name: BinaryName, origin: ShapeInterface) {
        self.interfaces.entry(name).or_insert(origin);
    }
}

/// Sort the supertypes of `decl` into a concrete base and interfaces.
///
/// Fails with `Error::AmbiguousBase` on the second concrete base, and passes
/// resolution errors of the oracle through.
pub fn classify(oracle: &dyn ResolutionOracle, decl: &ClassDeclaration) -> Result<ClassShape> {
    decl.supers
        .iter()
        .try_fold(ClassShape::default(), |shape, sup_ref| {
            let sup = oracle.resolve_supertype(&decl.name, sup_ref)?;
            shape.add(oracle, &decl.name, sup)
        })
}
