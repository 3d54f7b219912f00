//! Macros for ergonomic state enum definitions.

/// Generate a `State` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use regflow::state_enum;
///
/// state_enum! {
///     pub enum UploadState {
///         Queued,
///         Sending,
///         Done,
///         Failed,
///     }
///     final: [Done, Failed]
///     error: [Failed]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum SessionState {
            Open,
            Closing,
            Closed,
            Aborted,
        }
        final: [Closed, Aborted]
        error: [Aborted]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(SessionState::Open.name(), "Open");
        assert!(!SessionState::Open.is_final());
        assert!(SessionState::Closed.is_final());
        assert!(!SessionState::Closed.is_error());
        assert!(SessionState::Aborted.is_final());
        assert!(SessionState::Aborted.is_error());
    }

    #[test]
    fn state_enum_defaults_to_no_final_states() {
        state_enum! {
            enum Cycle {
                A,
                B,
            }
        }

        assert!(!Cycle::A.is_final());
        assert!(!Cycle::B.is_error());
    }
}
