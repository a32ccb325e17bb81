// Copyright 2024 The Quick Resize Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Opens a window with two outlined rectangles. Resize it, minimize it,
//! press F11 to go fullscreen and back.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use quick_resize::{PlatformError, WindowConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("Hello, World!");

    let config = WindowConfig::new();
    if let Err(err) = launch(&config) {
        let code = err
            .downcast_ref::<PlatformError>()
            .map_or(1, PlatformError::exit_code);
        tracing::error!("{:#}", err);
        std::process::exit(code);
    }
}

fn launch(config: &WindowConfig) -> anyhow::Result<()> {
    quick_resize::run(config).with_context(|| format!("running window {:?}", config.get_title()))
}
