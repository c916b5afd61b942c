//! Stack growth for deeply nested ParaCL programs.
//!
//! Both the parser and the evaluator recurse once per nesting level of the
//! syntax tree. A program such as `x = ((((...))))` or a long chain of
//! statements folded into nested `Scope` nodes can therefore exhaust the
//! default thread stack long before it exhausts memory.
//!
//! Every recursive entry point wraps its body in [`ensure_sufficient_stack`],
//! which checks the remaining stack and, when it drops under [`RED_ZONE`],
//! continues the closure on a freshly allocated segment.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; the wasm runtime owns its stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
