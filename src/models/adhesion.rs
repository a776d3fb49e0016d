//! Adhesion and fracture models.
//!
//! This module contains models for rate-dependent adhesion in viscoelastic
//! materials and related fracture-mechanics quantities.

pub mod mpl;
