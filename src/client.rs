use crate::account::{
    Account, AccountFeatures, AccountRecord, ModifyAccount, NewUser, RenewalStatus, UserSlot,
};
use crate::util::ResponseExt;
use crate::viewer::AccountSource;
use crate::{Result, Urls};
use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder};
use serde_json::json;
use std::result::Result as StdResult;
use uuid::Uuid;

/// A client for the dashboard account API.
///
/// # Example
///
/// ```ignore
/// use subdash::{Client, Urls};
///
/// let client = Client::new(Urls::local());
/// let account = client.account("acct_42").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    urls: Urls,
}

impl Client {
    pub fn new(urls: Urls) -> Self {
        Self {
            urls,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the URLs of the API endpoints.
    pub fn urls(&self) -> &Urls {
        &self.urls
    }

    fn request<I>(
        &self,
        method: Method,
        path_segments: I,
    ) -> StdResult<RequestBuilder, url::ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.urls.base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .extend(path_segments);
        Ok(self.client.request(method, url))
    }

    /// Fetches one account and maps it into the display model.
    pub async fn account(&self, account_id: &str) -> Result<Account> {
        let record = self.fetch_account(account_id).await?;
        Ok(Account::from(record))
    }

    /// Fetches the users occupying slots on an account.
    pub async fn account_users(&self, account_id: &str) -> Result<Vec<UserSlot>> {
        Ok(self
            .request(Method::GET, &["api", "accounts", account_id, "users"])?
            .send()
            .await?
            .parse()
            .await?)
    }

    /// Sets whether a user's email address is shown unmasked to other members
    /// of the account.
    pub async fn set_email_visibility(
        &self,
        account_id: &str,
        user_id: Uuid,
        visible: bool,
    ) -> Result<()> {
        let user_id = user_id.to_string();
        self.request(
            Method::POST,
            &[
                "api",
                "accounts",
                account_id,
                "users",
                user_id.as_str(),
                "email-visibility",
            ],
        )?
        .json(&json!({ "visible": visible }))
        .send()
        .await?
        .parse_empty()
        .await?;
        Ok(())
    }

    /// Fetches the feature lists of an account.
    pub async fn account_features(&self, account_id: &str) -> Result<AccountFeatures> {
        Ok(self
            .request(Method::GET, &["api", "accounts", account_id, "features"])?
            .send()
            .await?
            .parse()
            .await?)
    }

    /// Fetches the renewal state of an account.
    pub async fn renewal_status(&self, account_id: &str) -> Result<RenewalStatus> {
        Ok(self
            .request(
                Method::GET,
                &["api", "accounts", account_id, "renewal-status"],
            )?
            .send()
            .await?
            .parse()
            .await?)
    }

    /// Modifies the descriptive fields of an account and returns the updated
    /// display model.
    pub async fn modify_account(
        &self,
        account_id: &str,
        modification: &ModifyAccount,
    ) -> Result<Account> {
        let record: AccountRecord = self
            .request(Method::PUT, &["api", "accounts", account_id])?
            .json(modification)
            .send()
            .await?
            .parse()
            .await?;
        Ok(Account::from(record))
    }

    /// Adds a user to an account.
    pub async fn add_user(&self, account_id: &str, user: &NewUser) -> Result<UserSlot> {
        Ok(self
            .request(Method::POST, &["api", "accounts", account_id, "users"])?
            .json(user)
            .send()
            .await?
            .parse()
            .await?)
    }

    /// Removes a user from an account.
    pub async fn remove_user(&self, account_id: &str, user_id: Uuid) -> Result<()> {
        let user_id = user_id.to_string();
        self.request(
            Method::DELETE,
            &["api", "accounts", account_id, "users", user_id.as_str()],
        )?
        .send()
        .await?
        .parse_empty()
        .await?;
        Ok(())
    }
}

#[async_trait]
impl AccountSource for Client {
    async fn fetch_account(&self, account_id: &str) -> Result<AccountRecord> {
        debug!("fetching account {}", account_id);
        Ok(self
            .request(Method::GET, &["api", "accounts", account_id])?
            .send()
            .await?
            .parse()
            .await?)
    }
}
