//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod terminal;
pub mod testing;

pub const PROJECT_NAME: &str = "pogrep";

pub use testing::*;
