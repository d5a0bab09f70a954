use crate::common::{
    error::{AppError, Result},
    money::Money,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    name: String,
    /// Donations in the order they were made. Append-only.
    donations: Vec<Money>,
}

impl Donor {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(donor = %name, "set up donor with no donations");
        Self {
            name,
            donations: Vec::new(),
        }
    }

    /// Builds a donor from an existing history. The amounts are copied and
    /// validated the same way `add_donation` validates them.
    pub fn with_donations<I>(name: impl Into<String>, initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        let mut donor = Self {
            name: name.into(),
            donations: Vec::new(),
        };
        for amount in initial {
            donor.push_donation(amount)?;
        }
        tracing::debug!(
            donor = %donor.name,
            donations = donor.donations.len(),
            "set up donor"
        );
        Ok(donor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the donor. A collection holding this donor keeps its old key;
    /// use `DonorCollection::rename_donor` to re-key.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn donations(&self) -> &[Money] {
        &self.donations
    }

    /// Appends a donation. Negative amounts, and amounts that would take the
    /// total past what `Money` can hold, are rejected.
    pub fn add_donation(&mut self, amount: Money) -> Result<()> {
        self.push_donation(amount)?;
        tracing::info!(donor = %self.name, %amount, "donation recorded");
        Ok(())
    }

    fn push_donation(&mut self, amount: Money) -> Result<()> {
        Self::check_donation(&self.name, self.total_donations(), amount)?;
        self.donations.push(amount);
        Ok(())
    }

    /// Validates `amount` as the next gift on top of `total`.
    fn check_donation(name: &str, total: Money, amount: Money) -> Result<()> {
        if amount.is_negative() {
            return Err(AppError::invalid_amount(format!(
                "{amount} for donor {name} is negative"
            )));
        }
        if total.checked_add(amount).is_none() {
            return Err(AppError::invalid_amount(format!(
                "{amount} for donor {name} overflows their total"
            )));
        }
        Ok(())
    }

    pub fn total_donations(&self) -> Money {
        self.donations.iter().sum()
    }

    pub fn num_donations(&self) -> usize {
        self.donations.len()
    }

    /// Mean donation, or zero for a donor with no donations.
    pub fn avg_donations(&self) -> Money {
        self.total_donations().average_over(self.num_donations())
    }

    pub fn last_donation(&self) -> Option<Money> {
        let last = self.donations.last().copied();
        if last.is_none() {
            tracing::warn!(donor = %self.name, "donor has not made any donations");
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        str::FromStr,
        sync::{Arc, Mutex},
    };

    use super::*;

    fn money(v: &str) -> Money {
        Money::from_str(v).unwrap()
    }

    #[test]
    fn new_donor_has_no_donations() {
        let donor = Donor::new("Alice");

        assert_eq!(donor.name(), "Alice");
        assert!(donor.donations().is_empty());
        assert_eq!(donor.num_donations(), 0);
        assert_eq!(donor.total_donations(), Money::zero());
        assert_eq!(donor.last_donation(), None);
    }

    #[test]
    fn average_of_empty_donor_is_zero() {
        let donor = Donor::new("Nobody");
        assert_eq!(donor.avg_donations(), Money::zero());
    }

    #[test]
    fn derived_views_follow_appended_donations() {
        let mut donor = Donor::new("Bob");
        donor.add_donation(money("10.00")).unwrap();
        donor.add_donation(money("25.50")).unwrap();

        assert_eq!(donor.num_donations(), 2);
        assert_eq!(donor.total_donations(), money("35.50"));
        assert_eq!(donor.avg_donations(), money("17.75"));
        assert_eq!(donor.last_donation(), Some(money("25.50")));
        assert_eq!(donor.donations(), &[money("10.00"), money("25.50")]);
    }

    #[test]
    fn with_donations_copies_initial_history() {
        let initial = vec![money("100"), money("200")];
        let donor = Donor::with_donations("Alice", initial.clone()).unwrap();

        assert_eq!(donor.donations(), initial.as_slice());
        assert_eq!(donor.total_donations(), money("300"));
        assert_eq!(donor.avg_donations(), money("150"));
    }

    #[test]
    fn negative_donation_is_rejected_and_not_recorded() {
        let mut donor = Donor::new("Carol");
        donor.add_donation(money("5")).unwrap();

        let err = donor.add_donation(money("-1")).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
        assert_eq!(donor.donations(), &[money("5")]);

        assert!(Donor::with_donations("Dan", vec![money("-2")]).is_err());
    }

    #[test]
    fn donation_overflowing_total_is_rejected() {
        let big = Money::new(i64::MAX / 2 + 1);
        let mut donor = Donor::new("Big");
        donor.add_donation(big).unwrap();

        let err = donor.add_donation(big).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
        assert_eq!(donor.num_donations(), 1);
        assert_eq!(donor.total_donations(), big);

        assert!(Donor::with_donations("Big", vec![big, big]).is_err());
    }

    // Collects formatted log output for one closure.
    fn capture_logs<F: FnOnce()>(f: F) -> String {
        #[derive(Clone)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl Write for Buffer {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer(Arc::new(Mutex::new(Vec::new())));
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn with_donations_logs_initial_count() {
        let logs = capture_logs(|| {
            Donor::with_donations("Alice", vec![money("1"), money("2")]).unwrap();
        });
        assert!(logs.contains("donations=2"), "{logs}");
        assert!(!logs.contains("no donations"), "{logs}");
    }

    #[test]
    fn zero_donation_is_accepted() {
        let mut donor = Donor::new("Erin");
        donor.add_donation(Money::zero()).unwrap();
        assert_eq!(donor.num_donations(), 1);
        assert_eq!(donor.last_donation(), Some(Money::zero()));
    }

    #[test]
    fn set_name_renames_donor() {
        let mut donor = Donor::new("Frank");
        donor.set_name("Francis");
        assert_eq!(donor.name(), "Francis");
    }
}
