// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record store (in-memory).

pub mod memory;
pub mod seed;

pub use memory::MemoryDb;
