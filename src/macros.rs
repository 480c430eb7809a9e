//! Macros for declaring states and signals.

/// Declare a state enum and its `State` implementation.
///
/// Also generates an `ALL` constant listing every state, handy for
/// [`validate_hierarchy`](crate::validation::validate_hierarchy).
///
/// # Example
///
/// ```
/// use hsmlite::core::State;
/// use hsmlite::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Closed,
///         Open,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// assert_eq!(Door::ALL.len(), 3);
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every state, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare an enum of application signals numbered from `Signal::USER`.
///
/// # Example
///
/// ```
/// use hsmlite::core::{Event, Signal};
/// use hsmlite::signals;
///
/// signals! {
///     pub enum Button {
///         Press,
///         Release,
///         Hold,
///     }
/// }
///
/// assert_eq!(Button::Press.signal(), Signal::USER);
/// assert_eq!(Button::from_signal(Signal::user(2)), Some(Button::Hold));
/// assert_eq!(Button::from_signal(Signal::ENTER), None);
///
/// let event: Event = Button::Release.into();
/// assert_eq!(event.signal, Signal::user(1));
/// ```
#[macro_export]
macro_rules! signals {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every signal, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub const fn signal(self) -> $crate::core::Signal {
                $crate::core::Signal::user(self as u8)
            }

            pub fn from_signal(signal: $crate::core::Signal) -> ::core::option::Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.signal() == signal)
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::core::Signal {
            fn from(value: $name) -> Self {
                value.signal()
            }
        }

        impl<P> ::core::convert::From<$name> for $crate::core::Event<P> {
            fn from(value: $name) -> Self {
                $crate::core::Event::new(value.signal())
            }
        }
    };
}
