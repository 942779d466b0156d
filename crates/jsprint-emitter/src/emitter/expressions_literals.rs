use super::Printer;
use crate::error::{EmitError, EmitResult};
use crate::list_format::ListFormat;
use jsprint_ast::{
    ArrayLit, ExprOrSpread, GetterProp, MethodProp, ObjectLit, Prop, PropName, PropOrSpread,
    SetterProp,
};

impl<'a> Printer<'a> {
    // =========================================================================
    // Array Literals
    // =========================================================================

    pub(super) fn emit_array_lit(&mut self, n: &ArrayLit) -> EmitResult {
        let last = n.elements.last();
        self.emit_list(
            n.span,
            Some(n.elements.as_slice()),
            ListFormat::ARRAY_LITERAL_EXPRESSION_ELEMENTS,
            |p, element: &Option<ExprOrSpread>| match element {
                Some(element) => p.emit_expr_or_spread(element),
                None => {
                    // A trailing hole is only kept by an extra comma.
                    if last.is_some_and(|last| std::ptr::eq(last, element)) {
                        p.write(",");
                    }
                    Ok(())
                }
            },
        )
    }

    // =========================================================================
    // Object Literals
    // =========================================================================

    pub(super) fn emit_object_lit(&mut self, n: &ObjectLit) -> EmitResult {
        self.emit_list(
            n.span,
            Some(n.properties.as_slice()),
            ListFormat::OBJECT_LITERAL_EXPRESSION_PROPERTIES,
            Self::emit_prop_or_spread,
        )
    }

    fn emit_prop_or_spread(&mut self, n: &PropOrSpread) -> EmitResult {
        match n {
            PropOrSpread::Spread(spread) => self.emit_spread(spread),
            PropOrSpread::Prop(prop) => self.emit_prop(prop),
        }
    }

    fn emit_prop(&mut self, prop: &Prop) -> EmitResult {
        match prop {
            Prop::Shorthand(ident) => self.emit_ident(ident),
            Prop::KeyValue(n) => {
                self.emit_prop_name(&n.key)?;
                self.write(":");
                self.write_formatting_space();
                self.emit_expr(&n.value)
            }
            Prop::Assign(n) => {
                self.emit_ident(&n.key)?;
                self.write_formatting_space();
                self.write("=");
                self.write_formatting_space();
                self.emit_expr(&n.value)
            }
            Prop::Getter(n) => self.emit_getter_prop(n),
            Prop::Setter(n) => self.emit_setter_prop(n),
            Prop::Method(n) => self.emit_method_prop(n),
        }
    }

    fn emit_getter_prop(&mut self, n: &GetterProp) -> EmitResult {
        let Some(body) = &n.body else {
            return Err(EmitError::contract("getter without a body"));
        };
        self.write("get");
        self.write_space();
        self.emit_prop_name(&n.key)?;
        self.write("()");
        self.write_formatting_space();
        self.emit_block(body)
    }

    fn emit_setter_prop(&mut self, n: &SetterProp) -> EmitResult {
        let Some(body) = &n.body else {
            return Err(EmitError::contract("setter without a body"));
        };
        self.write("set");
        self.write_space();
        self.emit_prop_name(&n.key)?;
        self.write("(");
        self.emit_pat(&n.param)?;
        self.write(")");
        self.write_formatting_space();
        self.emit_block(body)
    }

    fn emit_method_prop(&mut self, n: &MethodProp) -> EmitResult {
        if n.function.is_async {
            self.write("async");
            self.write_space();
        }
        if n.function.is_generator {
            self.write("*");
        }
        self.emit_prop_name(&n.key)?;
        self.emit_function_signature_and_body(&n.function)
    }

    // =========================================================================
    // Property Names
    // =========================================================================

    pub(super) fn emit_prop_name(&mut self, key: &PropName) -> EmitResult {
        match key {
            PropName::Ident(ident) => self.emit_ident(ident),
            PropName::Str(s) => {
                self.emit_str(s);
                Ok(())
            }
            PropName::Num(n) => {
                self.emit_number(n);
                Ok(())
            }
            PropName::Computed(expr) => {
                self.write("[");
                self.emit_expr(expr)?;
                self.write("]");
                Ok(())
            }
        }
    }
}
