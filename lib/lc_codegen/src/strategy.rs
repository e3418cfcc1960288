use crate::member::*;
use lc_shape::{AccessFlags, ArtifactKind};
use lowerclass_core::decl::*;
use lowerclass_core::names::*;
use lowerclass_core::ty::{method_descriptor, JvmType};

/// How member bodies look in one kind of artifact
pub trait BodyStrategy: Sync {
    fn function(&self, class: &ClassFullname, decl: &FunctionDecl) -> Vec<MemberStub>;
    fn property(&self, class: &ClassFullname, decl: &PropertyDecl) -> Vec<MemberStub>;
}

/// Returns the strategy for `kind`
pub fn strategy_for(kind: ArtifactKind) -> &'static dyn BodyStrategy {
    match kind {
        ArtifactKind::Interface => &AbstractStubs,
        ArtifactKind::Implementation => &DirectBodies,
        ArtifactKind::DelegatingImplementation => &DelegatingBodies,
    }
}

/// Interface artifact: every member becomes an abstract method
struct AbstractStubs;

/// Implementation artifact: bodies as written, properties backed by fields.
/// Abstract members are left to the subclasses
struct DirectBodies;

/// Delegating implementation artifact: bodies forward through the
/// interface artifact of the class
struct DelegatingBodies;

impl BodyStrategy for AbstractStubs {
    fn function(&self, _class: &ClassFullname, decl: &FunctionDecl) -> Vec<MemberStub> {
        vec![MemberStub::method(
            &decl.name,
            decl.descriptor(),
            AccessFlags::PUBLIC | AccessFlags::ABSTRACT,
            MemberBody::Abstract,
        )]
    }

    fn property(&self, _class: &ClassFullname, decl: &PropertyDecl) -> Vec<MemberStub> {
        accessors(decl, AccessFlags::PUBLIC | AccessFlags::ABSTRACT, MemberBody::Abstract)
    }
}

impl BodyStrategy for DirectBodies {
    fn function(&self, _class: &ClassFullname, decl: &FunctionDecl) -> Vec<MemberStub> {
        if !decl.has_body {
            return vec![];
        }
        vec![MemberStub::method(
            &decl.name,
            decl.descriptor(),
            AccessFlags::PUBLIC,
            MemberBody::Direct,
        )]
    }

    fn property(&self, _class: &ClassFullname, decl: &PropertyDecl) -> Vec<MemberStub> {
        if !decl.has_initializer {
            return vec![];
        }
        let flags = if decl.mutable {
            AccessFlags::PRIVATE
        } else {
            AccessFlags::PRIVATE | AccessFlags::FINAL
        };
        let mut v = vec![MemberStub::field(&decl.name, decl.ty.descriptor(), flags)];
        v.extend(accessors(decl, AccessFlags::PUBLIC, MemberBody::Direct));
        v
    }
}

impl BodyStrategy for DelegatingBodies {
    fn function(&self, class: &ClassFullname, decl: &FunctionDecl) -> Vec<MemberStub> {
        if !decl.has_body {
            return vec![];
        }
        vec![MemberStub::method(
            &decl.name,
            decl.descriptor(),
            AccessFlags::PUBLIC,
            delegate_to(class),
        )]
    }

    fn property(&self, class: &ClassFullname, decl: &PropertyDecl) -> Vec<MemberStub> {
        if !decl.has_initializer {
            return vec![];
        }
        accessors(decl, AccessFlags::PUBLIC, delegate_to(class))
    }
}

fn delegate_to(class: &ClassFullname) -> MemberBody {
    MemberBody::Delegating {
        delegate: class.interface_name(),
    }
}

/// Getter, and setter if the property is mutable
fn accessors(decl: &PropertyDecl, flags: AccessFlags, body: MemberBody) -> Vec<MemberStub> {
    let mut v = vec![MemberStub::method(
        getter_name(&decl.name),
        method_descriptor([], &decl.ty),
        flags,
        body.clone(),
    )];
    if decl.mutable {
        v.push(MemberStub::method(
            setter_name(&decl.name),
            method_descriptor([&decl.ty], &JvmType::Unit),
            flags,
            body,
        ));
    }
    v
}
