/*
 *   Copyright (c) 2025-2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use clap::Parser;
use r3bl_mention::{CommonResult, TracingConfig, throws, try_initialize_logging_global};
use r3bl_mention_cmdr::{CLIArg, try_format_result, try_run};

#[allow(clippy::needless_return)]
fn main() -> CommonResult<()> {
    throws!({
        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(TracingConfig::new_file(None)).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        let maybe_match = try_run(&cli_arg, std::io::stdin().lock()).inspect_err(|error| {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run mention due to the following problem",
                error = ?error
            );
        })?;

        let output = try_format_result(maybe_match.as_ref(), cli_arg.mention_options.json)?;
        println!("{output}");

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}
