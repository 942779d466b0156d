use super::Printer;
use crate::error::{EmitError, EmitResult};
use crate::list_format::ListFormat;
use jsprint_ast::{ArrayPat, NodeKind, ObjectPat, ObjectPatProp, Pat, RestPat};
use jsprint_common::Spanned;

impl<'a> Printer<'a> {
    // =========================================================================
    // Binding Patterns
    // =========================================================================

    pub fn emit_pat(&mut self, pat: &Pat) -> EmitResult {
        self.record_mark(pat.span());
        match pat {
            Pat::Ident(ident) => self.emit_ident(ident),
            Pat::Array(n) => self.emit_array_pat(n),
            Pat::Object(n) => self.emit_object_pat(n),
            Pat::Rest(n) => self.emit_rest_pat(n),
            Pat::Assign(n) => {
                if n.type_annotation.is_some() {
                    return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
                }
                self.emit_pat(&n.left)?;
                self.write_formatting_space();
                self.write("=");
                self.write_formatting_space();
                self.emit_expr(&n.right)
            }
            Pat::Expr(expr) => self.emit_expr(expr),
        }
    }

    fn emit_array_pat(&mut self, n: &ArrayPat) -> EmitResult {
        if n.type_annotation.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }
        let last = n.elements.last();
        self.emit_list(
            n.span,
            Some(n.elements.as_slice()),
            ListFormat::ARRAY_BINDING_PATTERN_ELEMENTS,
            |p, element: &Option<Pat>| match element {
                Some(element) => p.emit_pat(element),
                None => {
                    if last.is_some_and(|last| std::ptr::eq(last, element)) {
                        p.write(",");
                    }
                    Ok(())
                }
            },
        )
    }

    fn emit_object_pat(&mut self, n: &ObjectPat) -> EmitResult {
        if n.type_annotation.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }
        self.emit_list(
            n.span,
            Some(n.props.as_slice()),
            ListFormat::OBJECT_BINDING_PATTERN_ELEMENTS,
            Self::emit_object_pat_prop,
        )
    }

    fn emit_object_pat_prop(&mut self, prop: &ObjectPatProp) -> EmitResult {
        match prop {
            ObjectPatProp::KeyValue(n) => {
                self.emit_prop_name(&n.key)?;
                self.write(":");
                self.write_formatting_space();
                self.emit_pat(&n.value)
            }
            ObjectPatProp::Assign(n) => {
                self.emit_ident(&n.key)?;
                if let Some(value) = &n.value {
                    self.write_formatting_space();
                    self.write("=");
                    self.write_formatting_space();
                    self.emit_expr(value)?;
                }
                Ok(())
            }
            ObjectPatProp::Rest(n) => self.emit_rest_pat(n),
        }
    }

    fn emit_rest_pat(&mut self, n: &RestPat) -> EmitResult {
        if n.type_annotation.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }
        self.write("...");
        self.emit_pat(&n.argument)
    }
}
