//! Account detail viewer component.
//!
//! [`AccountDetailViewer`] is a modal view over one account: it fetches the
//! record for its target identifier, maps it into the display model, and
//! renders either an overview or a users view selected by a local tab. The
//! fetch lifecycle is an explicit state machine driven by [`FetchTicket`]s so
//! that a slow response for a superseded identifier can never overwrite newer
//! state.

use crate::account::{Account, AccountRecord};
use crate::format;
use async_trait::async_trait;
use log::{debug, warn};
use std::fmt;

/// Placeholder shown in the overview when an account has no description.
const NO_DESCRIPTION: &str = "No description available.";

/// The tab selected in the loaded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Overview,
    Users,
}

/// A source of account records.
///
/// [`Client`](crate::Client) is the production implementation; tests drive
/// the viewer with in-memory sources.
#[async_trait]
pub trait AccountSource {
    async fn fetch_account(&self, account_id: &str) -> crate::Result<AccountRecord>;
}

/// The state of the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerState {
    /// A fetch for the target identifier is outstanding.
    Loading,
    /// The account is present and one of the two tabs is shown.
    Loaded { account: Account, tab: Tab },
    /// The fetch failed; the view offers a retry.
    Failed { reason: String },
}

/// A token identifying one issued fetch.
///
/// Completing a fetch whose ticket is stale (the target identifier changed or
/// a newer fetch was issued) leaves the viewer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    account_id: String,
    generation: u64,
}

impl FetchTicket {
    /// The identifier this fetch was issued for.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

/// A modal component showing the details of one account.
pub struct AccountDetailViewer {
    account_id: String,
    state: ViewerState,
    generation: u64,
    on_close: Box<dyn FnMut()>,
}

impl fmt::Debug for AccountDetailViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountDetailViewer")
            .field("account_id", &self.account_id)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}

impl AccountDetailViewer {
    /// Creates a new viewer targeting `account_id` in the `Loading` state.
    ///
    /// `on_close` is invoked by [`request_close`](Self::request_close); the
    /// rendered header icon and footer button both map to that action.
    pub fn new<S, F>(account_id: S, on_close: F) -> Self
    where
        S: Into<String>,
        F: FnMut() + 'static,
    {
        Self {
            account_id: account_id.into(),
            state: ViewerState::Loading,
            generation: 0,
            on_close: Box::new(on_close),
        }
    }

    /// The identifier the viewer currently targets.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The current state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// The active tab, if the account is loaded.
    pub fn active_tab(&self) -> Option<Tab> {
        match &self.state {
            ViewerState::Loaded { tab, .. } => Some(*tab),
            _ => None,
        }
    }

    /// Retargets the viewer to a new identifier.
    ///
    /// On a change the state resets to `Loading` and all outstanding fetch
    /// tickets become stale. Setting the identifier it already targets is a
    /// no-op. A new fetch must then be issued with
    /// [`begin_fetch`](Self::begin_fetch) or [`load`](Self::load).
    pub fn set_account_id<S: Into<String>>(&mut self, account_id: S) {
        let account_id = account_id.into();
        if account_id == self.account_id {
            return;
        }
        debug!(
            "viewer retargeted from account {} to {}",
            self.account_id, account_id
        );
        self.account_id = account_id;
        self.state = ViewerState::Loading;
        self.generation += 1;
    }

    /// Issues a fetch for the current identifier and returns its ticket.
    ///
    /// The state resets to `Loading`; earlier tickets become stale. The retry
    /// control rendered in the `Failed` state maps to this action.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.state = ViewerState::Loading;
        self.generation += 1;
        FetchTicket {
            account_id: self.account_id.clone(),
            generation: self.generation,
        }
    }

    /// Completes a fetch issued by [`begin_fetch`](Self::begin_fetch).
    ///
    /// Returns whether the result was applied. A stale ticket is discarded
    /// without touching state.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: crate::Result<AccountRecord>,
    ) -> bool {
        if ticket.generation != self.generation {
            warn!(
                "discarding stale fetch result for account {}",
                ticket.account_id
            );
            return false;
        }
        self.state = match result {
            Ok(record) => ViewerState::Loaded {
                account: Account::from(record),
                tab: Tab::Overview,
            },
            Err(e) => ViewerState::Failed {
                // Server errors carry the message worth showing; other
                // failures display their top-level description.
                reason: match &e {
                    crate::Error::Response(inner) => inner.to_string(),
                    other => other.to_string(),
                },
            },
        };
        true
    }

    /// Fetches the current identifier from `source` and applies the result.
    ///
    /// Returns whether the result was applied; it is discarded when the
    /// viewer was retargeted while the fetch was in flight.
    pub async fn load<S>(&mut self, source: &S) -> bool
    where
        S: AccountSource + Sync,
    {
        let ticket = self.begin_fetch();
        let result = source.fetch_account(ticket.account_id()).await;
        self.complete_fetch(ticket, result)
    }

    /// Selects a tab. Pure and synchronous; has no effect outside the
    /// `Loaded` state and never triggers a fetch.
    pub fn select_tab(&mut self, tab: Tab) {
        if let ViewerState::Loaded { tab: current, .. } = &mut self.state {
            *current = tab;
        }
    }

    /// Requests dismissal of the view by invoking the `on_close` callback.
    pub fn request_close(&mut self) {
        (self.on_close)();
    }

    /// Renders the viewer as an HTML fragment.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"modal account-detail\">\n");
        match &self.state {
            ViewerState::Loading => {
                out.push_str("<p class=\"loading\">Loading account…</p>\n");
            }
            ViewerState::Failed { reason } => {
                out.push_str(&format!("<p class=\"error\">{}</p>\n", reason));
                out.push_str("<button data-action=\"retry\">Retry</button>\n");
            }
            ViewerState::Loaded { account, tab } => {
                push_header(&mut out, account);
                push_tab_bar(&mut out, account, *tab);
                match tab {
                    Tab::Overview => push_overview(&mut out, account),
                    Tab::Users => push_users(&mut out, account),
                }
                out.push_str(
                    "<footer><button data-action=\"close\">Close</button></footer>\n",
                );
            }
        }
        out.push_str("</div>\n");
        out
    }
}

fn push_header(out: &mut String, account: &Account) {
    out.push_str("<header>\n");
    out.push_str(&format!(
        "<span class=\"glyph\">{}</span>\n",
        account.service_type.glyph()
    ));
    out.push_str(&format!("<h2>{}</h2>\n", account.product_name));
    out.push_str(&format!("<p class=\"label\">{}</p>\n", account.label));
    out.push_str("<button class=\"close\" data-action=\"close\">×</button>\n");
    out.push_str("</header>\n");
}

fn push_tab_bar(out: &mut String, account: &Account, active: Tab) {
    let class = |tab: Tab| if tab == active { " class=\"active\"" } else { "" };
    out.push_str("<nav class=\"tabs\">\n");
    out.push_str(&format!(
        "<button{} data-tab=\"overview\">Overview</button>\n",
        class(Tab::Overview)
    ));
    out.push_str(&format!(
        "<button{} data-tab=\"users\">Users ({}/{})</button>\n",
        class(Tab::Users),
        account.current_users,
        account.max_user_slots,
    ));
    out.push_str("</nav>\n");
}

fn push_overview(out: &mut String, account: &Account) {
    let description = if account.description.is_empty() {
        NO_DESCRIPTION
    } else {
        &account.description
    };
    out.push_str("<section class=\"overview\">\n");
    out.push_str(&format!("<p class=\"description\">{}</p>\n", description));
    out.push_str("<dl class=\"field-grid\">\n");
    push_field(out, "Service Type", account.service_type.label());
    push_field(out, "Subscription", &account.subscription_type);
    push_field(out, "Cost", &format::currency(account.cost));
    push_field(out, "Renewal Status", &account.renewal_status);
    out.push_str("</dl>\n</section>\n");
}

fn push_users(out: &mut String, account: &Account) {
    let holder = &account.primary_holder;
    out.push_str("<section class=\"users\">\n<div class=\"holder-card\">\n");
    out.push_str(&format!("<h3>{}</h3>\n", holder.name));
    out.push_str(&format!("<p>{}</p>\n", holder.contact()));
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<p class=\"slots\">{} of {} slots used</p>\n",
        account.current_users, account.max_user_slots,
    ));
    out.push_str("</section>\n");
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("<dt>{}</dt><dd>{}</dd>\n", label, value));
}
