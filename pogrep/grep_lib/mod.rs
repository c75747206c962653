//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Searching .po files and showing what was found.
//!
//! The pipeline is: [`paths`] resolves operands into files, [`scan`] finds
//! the matching entries, [`present`] prints them, coloring through
//! [`highlight`] with a [`colors::ColorProfile`].

pub mod colors;
pub mod error;
pub mod highlight;
pub mod paths;
pub mod pattern;
pub mod present;
pub mod scan;
pub mod table;
