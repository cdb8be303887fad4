// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::storage::DocumentStorage;

/// Shared application state, injected into every handler.
///
/// The storage handle and token issuer are constructed once at startup and
/// passed in explicitly; nothing here is a process-wide global.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<DocumentStorage>,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(storage: DocumentStorage, tokens: TokenIssuer) -> Self {
        Self {
            storage: Arc::new(storage),
            tokens: Arc::new(tokens),
        }
    }
}
