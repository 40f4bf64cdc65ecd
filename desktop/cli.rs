/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::path::PathBuf;

use bpaf::Bpaf;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
pub struct Options {
    /// Directory holding the vault and preferences (defaults to the user
    /// config dir)
    #[bpaf(argument("DIR"))]
    pub data_dir: Option<PathBuf>,
    /// Keep the vault in memory only; nothing is read from or written to disk
    pub ephemeral: bool,
    /// Log filter, e.g. `info` or `keyshell=debug`
    #[bpaf(argument("FILTER"))]
    pub log_filter: Option<String>,
}
