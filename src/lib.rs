//! # MPL Adhesion
//!
//! Rate-dependent adhesion amplification for viscoelastic broad-band
//! materials, after Maghami et al., *Bulk and fracture process zone
//! contribution to the rate-dependent adhesion amplification in
//! viscoelastic broad-band materials*, JMPS 193 (2024) 105844.
//!
//! The crate solves the implicit fixed-point relation of Eq. (B.1) with the
//! closed-form hypergeometric dissipation integral of Eqs. (B.2–B.3),
//! producing `Γ̂_eff(ν̂)` curves over a logarithmic rate grid for a family
//! of power-law exponents. Rendering and file output are left to consumers
//! of the returned curves.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations and
//!   their computational cores.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code follows a natural progression as needs emerge: it starts in
//! a model's internal `core` module, moves to a domain-level support module
//! if useful across models in a domain, and lands in [`support`] once it is
//! useful across domains (as the constraint and hypergeometric machinery
//! has). Only crate-level utilities in [`support`] are public.

pub mod models;
pub mod support;
