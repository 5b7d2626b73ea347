// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

pub mod config;
pub mod restore;
pub mod status;
pub mod translate;

pub use config::{subcmd_init_config, subcmd_show_config};
pub use restore::subcmd_restore;
pub use status::subcmd_status;
pub use translate::subcmd_translate;
