//! Thermal systems models.
//!
//! This module contains models for the thermal response of buildings.

pub mod indoor_temp;
