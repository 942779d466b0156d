//! Operator and keyword enums.
//!
//! Each enum serializes as its source token, which is also what
//! `as_str` returns for the printer.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $tok:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tok)]
                $variant,
            )*
        }

        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tok,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    pub enum BinaryOp {
        EqEq => "==",
        NotEq => "!=",
        EqEqEq => "===",
        NotEqEq => "!==",
        Lt => "<",
        LtEq => "<=",
        Gt => ">",
        GtEq => ">=",
        LShift => "<<",
        RShift => ">>",
        ZeroFillRShift => ">>>",
        Add => "+",
        Sub => "-",
        Mul => "*",
        Div => "/",
        Mod => "%",
        BitOr => "|",
        BitXor => "^",
        BitAnd => "&",
        LogicalOr => "||",
        LogicalAnd => "&&",
        In => "in",
        InstanceOf => "instanceof",
        Exp => "**",
        NullishCoalescing => "??",
    }
}

impl BinaryOp {
    /// `in` and `instanceof` need whitespace on both sides in every mode.
    pub const fn is_keyword(self) -> bool {
        matches!(self, BinaryOp::In | BinaryOp::InstanceOf)
    }
}

token_enum! {
    pub enum AssignOp {
        Assign => "=",
        AddAssign => "+=",
        SubAssign => "-=",
        MulAssign => "*=",
        DivAssign => "/=",
        ModAssign => "%=",
        LShiftAssign => "<<=",
        RShiftAssign => ">>=",
        ZeroFillRShiftAssign => ">>>=",
        BitOrAssign => "|=",
        BitXorAssign => "^=",
        BitAndAssign => "&=",
        ExpAssign => "**=",
        AndAssign => "&&=",
        OrAssign => "||=",
        NullishAssign => "??=",
    }
}

token_enum! {
    pub enum UpdateOp {
        PlusPlus => "++",
        MinusMinus => "--",
    }
}

token_enum! {
    pub enum UnaryOp {
        Minus => "-",
        Plus => "+",
        Bang => "!",
        Tilde => "~",
        TypeOf => "typeof",
        Void => "void",
        Delete => "delete",
    }
}

impl UnaryOp {
    /// Word operators are followed by a space unless the operand cannot
    /// merge with them.
    pub const fn is_keyword(self) -> bool {
        matches!(self, UnaryOp::TypeOf | UnaryOp::Void | UnaryOp::Delete)
    }
}

token_enum! {
    pub enum VarDeclKind {
        Var => "var",
        Let => "let",
        Const => "const",
    }
}

token_enum! {
    pub enum MethodKind {
        Method => "method",
        Getter => "getter",
        Setter => "setter",
    }
}

token_enum! {
    pub enum Accessibility {
        Public => "public",
        Protected => "protected",
        Private => "private",
    }
}
