//! `labelled_enum!` declares a closed enumeration whose variants map one to
//! one onto the lowercase labels stored in the database and sent over JSON.

macro_rules! labelled_enum {
  (
    $(#[$meta:meta])*
    $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub enum $name {
      $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
    }

    impl $name {
      /// Every variant, in declaration order.
      pub const ALL: &'static [$name] = &[$($name::$variant),+];

      pub fn as_str(self) -> &'static str {
        match self {
          $($name::$variant => $label),+
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl std::str::FromStr for $name {
      type Err = crate::Error;

      fn from_str(s: &str) -> crate::Result<Self> {
        match s {
          $($label => Ok($name::$variant),)+
          other => Err(crate::Error::UnknownVariant {
            kind:  stringify!($name),
            value: other.to_owned(),
          }),
        }
      }
    }
  };
}
