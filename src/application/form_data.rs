use crate::domain::auth::Credentials;
use crate::domain::invoice::RawInvoiceFields;
use crate::domain::invoice::validation::{AMOUNT_FIELD, CUSTOMER_ID_FIELD, STATUS_FIELD};

/// Raw submitted form fields, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
  fields: Vec<(String, String)>,
}

impl FormData {
  /// Decodes an `application/x-www-form-urlencoded` body.
  pub fn from_urlencoded(body: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
    let fields = serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)?;
    Ok(Self { fields })
  }

  /// First value submitted under `name`.
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .fields
      .iter()
      .find(|(key, _)| key == name)
      .map(|(_, value)| value.as_str())
  }

  pub fn invoice_fields(&self) -> RawInvoiceFields {
    RawInvoiceFields {
      customer_id: self.get(CUSTOMER_ID_FIELD).map(str::to_string),
      amount: self.get(AMOUNT_FIELD).map(str::to_string),
      status: self.get(STATUS_FIELD).map(str::to_string),
    }
  }

  pub fn credentials(&self) -> Credentials {
    Credentials {
      email: self.get("email").map(str::to_string),
      password: self.get("password").map(str::to_string),
      redirect_to: self.get("redirectTo").map(str::to_string),
    }
  }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
  K: Into<String>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      fields: iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }
}
