//! Grammar context threaded through the recursive descent.

bitflags::bitflags! {
    /// Flags describing where the parser currently is. A new value is
    /// installed with `Parser::with_context` and the previous one is
    /// restored when the closure returns.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Context: u16 {
        const NONE                       = 0;
        const IN_FUNCTION                = 1 << 0;
        const IN_ITERATION               = 1 << 1;
        const IN_SWITCH                  = 1 << 2;
        /// `yield` is an operator (generator bodies and parameters).
        const ALLOW_YIELD                = 1 << 3;
        /// `await` is an operator (async bodies, module top level).
        const ALLOW_AWAIT                = 1 << 4;
        /// Private names may be referenced.
        const IN_CLASS                   = 1 << 5;
        /// `in` is not a binary operator (for-statement initializers).
        const DISALLOW_IN                = 1 << 6;
        /// Inside a `declare` declaration.
        const AMBIENT                    = 1 << 7;
        /// The `extends` clause of a conditional type's check type.
        const DISALLOW_CONDITIONAL_TYPES = 1 << 8;

        /// Flags that do not cross a function boundary.
        const FUNCTION_BOUNDARY = Self::IN_ITERATION.bits()
            | Self::IN_SWITCH.bits()
            | Self::ALLOW_YIELD.bits()
            | Self::ALLOW_AWAIT.bits()
            | Self::DISALLOW_IN.bits()
            | Self::DISALLOW_CONDITIONAL_TYPES.bits();
    }
}

impl Context {
    /// The context for the parameters and body of a function.
    pub fn for_function(self, is_async: bool, generator: bool) -> Context {
        let mut ctx = (self - Context::FUNCTION_BOUNDARY) | Context::IN_FUNCTION;
        ctx.set(Context::ALLOW_AWAIT, is_async);
        ctx.set(Context::ALLOW_YIELD, generator);
        ctx
    }
}

/// A label in scope, and whether it names a loop (and so is a valid
/// `continue` target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub is_loop: bool,
}
