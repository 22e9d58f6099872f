//! Hardware driver implementations for the Cede status panel

#![no_std]
#![deny(unsafe_code)]

pub mod panel;
