// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demonstrations of the Rustle crates.
//!
//! See the `examples/` directory of this package:
//! - `broadcast_basics`: subjects, keyed listeners, snapshot semantics.
//! - `click_basics`: hub, dispatchers, and click recognition end to end.
