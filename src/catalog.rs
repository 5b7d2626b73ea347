// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

pub mod backup;
pub mod entry;
pub mod file;
pub mod reverter;
pub mod text;
