//! Client-side view-model state.
//!
//! DESIGN
//! ======
//! State is split by concern (`books` for the fetch lifecycle, `fault` for
//! the error boundary) so components depend on small focused models. Each
//! lifecycle is a tagged enum, which keeps illegal combinations such as
//! "loading and errored at once" unrepresentable.

pub mod books;
pub mod fault;
