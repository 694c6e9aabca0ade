// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod commands;
pub mod db;
pub mod errors;
pub mod forms;
pub mod models;
pub mod reconcile;
pub mod session;
pub mod utils;
