use crate::emitter::Emitters;
use crate::sink::ArtifactWriter;
use anyhow::Result;
use lc_shape::ArtifactKind;
use lowerclass_core::decl::*;

/// Hand every member of `decl` to its emitter, in declaration order.
/// The emitters decide what `kind` means for the member.
pub fn dispatch_members(
    decl: &ClassDeclaration,
    out: &mut ArtifactWriter<'_>,
    kind: ArtifactKind,
    emitters: &Emitters<'_>,
) -> Result<()> {
    for member in &decl.members {
        match member {
            MemberDecl::Property(p) => emitters.property.emit_property(out, p, kind)?,
            MemberDecl::Function(f) => emitters.function.emit_function(out, f, kind)?,
        }
    }
    Ok(())
}
