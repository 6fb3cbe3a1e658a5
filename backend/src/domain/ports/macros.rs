//! Port error declarations.
//!
//! Every persistence port reports failures as variants carrying one
//! human-readable `String`. [`define_port_error!`] derives the enum with its
//! `thiserror` display and a snake_case constructor per variant, so adapters
//! write `UserPersistenceError::query("boom")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $field:ident } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $field: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[must_use]
                    pub fn [<$variant:snake>]($field: impl Into<String>) -> Self {
                        Self::$variant { $field: $field.into() }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        /// Failures of an imaginary ledger port.
        pub enum LedgerError {
            Offline { message } => "ledger offline: {message}",
            MissingEntry { key } => "no entry {key}",
        }
    }

    #[rstest]
    fn constructors_are_snake_case_and_accept_str() {
        assert_eq!(
            LedgerError::offline("refused"),
            LedgerError::Offline {
                message: "refused".to_owned()
            }
        );
        assert_eq!(
            LedgerError::missing_entry(String::from("fk_to")).to_string(),
            "no entry fk_to"
        );
    }

    #[rstest]
    fn display_embeds_the_detail() {
        assert_eq!(
            LedgerError::offline("timed out").to_string(),
            "ledger offline: timed out"
        );
    }
}
