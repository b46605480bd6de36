//! Funding template operations

use tracing::info;

use crate::error::{WalletsError, WalletsResult};
use crate::models::{EntityKind, FundingTemplate, IntoMoney};

use super::App;

impl App {
    /// Build and fully validate a template against the live collections
    fn build_funding_template<I, K, A>(
        &self,
        name: &str,
        amount: impl IntoMoney,
        account: &str,
        frequency: &str,
        allocation: I,
    ) -> WalletsResult<FundingTemplate>
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: IntoMoney,
    {
        self.accounts.ensure_contains(account)?;

        let mut template = FundingTemplate::new(name, amount, account, frequency)?;
        for (wallet, share) in allocation {
            let wallet = wallet.into();
            self.wallets.ensure_contains(&wallet)?;
            template.add_wallet_to_allocation(wallet, share)?;
        }

        if template.allocation().is_empty() {
            return Err(WalletsError::Validation(format!(
                "Funding template {} must allocate to at least one wallet",
                name
            )));
        }
        template.validate()?;
        Ok(template)
    }

    /// Create a funding template
    ///
    /// Nothing is stored unless the account and every wallet exist and the
    /// allocation adds up to `amount`.
    pub fn create_funding_template<I, K, A>(
        &mut self,
        name: &str,
        amount: impl IntoMoney,
        account: &str,
        frequency: &str,
        allocation: I,
    ) -> WalletsResult<()>
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: IntoMoney,
    {
        if self.funding_templates.contains(name) {
            return Err(WalletsError::AlreadyExists {
                kind: EntityKind::FundingTemplate,
                key: name.to_string(),
            });
        }

        let template = self.build_funding_template(name, amount, account, frequency, allocation)?;
        self.funding_templates.create_item(name, template)?;
        info!(user = %self.user, template = name, "created funding template");
        Ok(())
    }

    /// Replace an existing funding template, with the same checks as create
    pub fn update_funding_template<I, K, A>(
        &mut self,
        name: &str,
        amount: impl IntoMoney,
        account: &str,
        frequency: &str,
        allocation: I,
    ) -> WalletsResult<()>
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: IntoMoney,
    {
        self.funding_templates.ensure_contains(name)?;

        let template = self.build_funding_template(name, amount, account, frequency, allocation)?;
        let mut templates = self.funding_templates.clone();
        templates.replace(name, template)?;
        templates.save()?;
        self.funding_templates = templates;

        info!(user = %self.user, template = name, "updated funding template");
        Ok(())
    }

    /// Delete a funding template
    pub fn remove_funding_template(&mut self, name: &str) -> WalletsResult<()> {
        self.funding_templates.ensure_contains(name)?;

        let mut templates = self.funding_templates.clone();
        templates.remove(name)?;
        templates.save()?;
        self.funding_templates = templates;

        info!(user = %self.user, template = name, "removed funding template");
        Ok(())
    }

    /// Apply a funding template
    ///
    /// Credits the template's amount to its account and each share to its
    /// wallet, then saves accounts and wallets. The template store is not
    /// touched.
    pub fn fund_wallets(&mut self, name: &str) -> WalletsResult<()> {
        let template = self.funding_templates.get(name)?;
        let allocation = template.allocation();
        let account = template.account().to_string();
        let amount = template.amount();

        self.accounts.ensure_contains(&account)?;
        for wallet in allocation.wallets() {
            self.wallets.ensure_contains(wallet)?;
        }

        let mut accounts = self.accounts.clone();
        accounts.get_mut(&account)?.add(amount);

        let mut wallets = self.wallets.clone();
        for (wallet, share) in allocation.iter() {
            wallets.get_mut(wallet)?.add(share);
        }

        // A failure on the second save leaves the first file already written.
        accounts.save()?;
        wallets.save()?;
        self.accounts = accounts;
        self.wallets = wallets;

        info!(user = %self.user, template = name, %account, %amount, "funded wallets");
        Ok(())
    }
}
