use crate::prelude::*;
use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

///
/// Email
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, Trim)]
#[trim(text)]
pub struct Email(pub String);

///
/// Address
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, Trim)]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postcode: String,
}

///
/// Signup
/// Form payload as it arrives from a client.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, Trim)]
pub struct Signup {
    pub email: Email,
    pub display_name: String,
    #[trim(skip)]
    pub password: String,
    pub address: Option<Box<Address>>,
    pub tags: Vec<String>,
    pub age: u32,
}

///
/// Household
/// Several members sharing one postal address.
///

#[derive(Debug, Default, Trim)]
pub struct Household {
    pub name: String,
    pub address: Rc<RefCell<Address>>,
    pub members: Vec<Rc<RefCell<Signup>>>,
}

///
/// Billing
///

#[derive(Debug, Default, Trim)]
pub struct Billing {
    pub shipping: Arc<Mutex<Address>>,
    pub invoice: Arc<Mutex<Address>>,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use trimmer::{TrimError, Trimmer, obs::TraceEvent, visitor::NodeKind};

    const SIGNUP_JSON: &str = r#"{
        "email": "  ada@example.com\n",
        "display_name": "\tAda Lovelace ",
        "password": "  hunter2  ",
        "address": {
            "line1": " 12 St James's Square ",
            "line2": null,
            "city": "London\n",
            "postcode": "SW1Y 4JH"
        },
        "tags": [" early ", "vip"],
        "age": 36
    }"#;

    fn padded_address() -> Address {
        Address {
            line1: "  1 Main Street".to_string(),
            line2: Some(" Flat 2 ".to_string()),
            city: "Springfield  ".to_string(),
            postcode: "12345".to_string(),
        }
    }

    #[test]
    fn trims_deserialized_payload() {
        let mut signup: Signup = serde_json::from_str(SIGNUP_JSON).unwrap();

        trimmer::trim_strings(&mut signup).unwrap();

        assert_eq!(signup.email, Email("ada@example.com".to_string()));
        assert_eq!(signup.display_name, "Ada Lovelace");
        assert_eq!(signup.password, "  hunter2  ");
        assert_eq!(signup.age, 36);

        let address = signup.address.as_deref().unwrap();
        assert_eq!(address.line1, "12 St James's Square");
        assert_eq!(address.line2, None);
        assert_eq!(address.city, "London");
        assert_eq!(address.postcode, "SW1Y 4JH");

        // collections are leaves
        assert_eq!(signup.tags, vec![" early ".to_string(), "vip".to_string()]);
    }

    #[test]
    fn trimmed_payload_serializes_clean() {
        let mut signup: Signup = serde_json::from_str(SIGNUP_JSON).unwrap();
        trimmer::trim_strings(&mut signup).unwrap();

        let json = serde_json::to_value(&signup).unwrap();

        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["display_name"], "Ada Lovelace");
        assert_eq!(json["address"]["city"], "London");
    }

    #[test]
    fn report_describes_the_run() {
        let mut signup: Signup = serde_json::from_str(SIGNUP_JSON).unwrap();

        let report = Trimmer::new().trim(&mut signup).unwrap();

        assert_eq!(
            report.trimmed,
            vec![
                "email".to_string(),
                "display_name".to_string(),
                "address.line1".to_string(),
                "address.city".to_string(),
            ]
        );
        assert_eq!(report.records, 2);
        assert_eq!(report.excluded, 1);
        assert_eq!(report.absent, 1);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.other, 2);
        assert!(!report.is_clean());
    }

    #[test]
    fn sink_sees_every_trimmed_path() {
        let seen = RefCell::new(Vec::new());
        let sink = |event: TraceEvent<'_>| {
            if let TraceKind::TextTrimmed { removed } = event.kind {
                seen.borrow_mut().push((event.path.to_string(), removed));
            }
        };

        let mut address = padded_address();
        Trimmer::new().with_sink(&sink).trim(&mut address).unwrap();

        assert_eq!(
            seen.into_inner(),
            vec![
                ("line1".to_string(), 2),
                ("line2".to_string(), 2),
                ("city".to_string(), 2),
            ]
        );
    }

    #[test]
    fn shared_cells_are_trimmed_once_reachable() {
        let shared = Rc::new(RefCell::new(padded_address()));
        let member = Rc::new(RefCell::new(Signup {
            display_name: " Bart ".to_string(),
            ..Signup::default()
        }));

        let mut household = Household {
            name: " Simpson ".to_string(),
            address: Rc::clone(&shared),
            members: vec![Rc::clone(&member)],
        };

        trimmer::trim_strings(&mut household).unwrap();

        assert_eq!(household.name, "Simpson");
        assert_eq!(shared.borrow().line1, "1 Main Street");
        assert_eq!(shared.borrow().line2.as_deref(), Some("Flat 2"));

        // records inside collections are not visited
        assert_eq!(member.borrow().display_name, " Bart ");
    }

    #[test]
    fn held_borrow_is_skipped() {
        let shared = Rc::new(RefCell::new(padded_address()));
        let mut household = Household {
            name: " Simpson ".to_string(),
            address: Rc::clone(&shared),
            members: Vec::new(),
        };

        let guard = shared.borrow();
        let report = Trimmer::new().trim(&mut household).unwrap();
        drop(guard);

        assert_eq!(household.name, "Simpson");
        assert_eq!(report.shared, 1);
        assert_eq!(shared.borrow().line1, "  1 Main Street");
    }

    #[test]
    fn trims_through_mutex_handles() {
        let shipping = Arc::new(Mutex::new(padded_address()));
        let mut billing = Billing {
            shipping: Arc::clone(&shipping),
            invoice: Arc::clone(&shipping),
        };

        let report = Trimmer::new().trim(&mut billing).unwrap();

        let address = shipping.lock().unwrap();
        assert_eq!(address.line1, "1 Main Street");
        assert_eq!(address.city, "Springfield");

        // the second handle sees already trimmed text
        assert_eq!(report.trimmed, vec!["shipping.line1", "shipping.line2", "shipping.city"]);
        assert_eq!(report.records, 3);
    }

    #[test]
    fn locked_mutex_is_skipped() {
        let shipping = Arc::new(Mutex::new(padded_address()));
        let mut billing = Billing {
            shipping: Arc::clone(&shipping),
            invoice: Arc::new(Mutex::new(padded_address())),
        };

        let guard = shipping.lock().unwrap();
        let report = Trimmer::new().trim(&mut billing).unwrap();
        drop(guard);

        assert_eq!(report.shared, 1);
        assert_eq!(shipping.lock().unwrap().line1, "  1 Main Street");
        assert_eq!(billing.invoice.lock().unwrap().line1, "1 Main Street");
    }

    #[test]
    fn borrowed_text_and_foreign_values() {
        #[derive(Trim)]
        struct Comment<'a> {
            author: &'a str,
            body: String,
            #[trim(opaque)]
            metadata: serde_json::Value,
        }

        let payload = String::from(" ada ");
        let mut comment = Comment {
            author: &payload,
            body: " hi\n".to_string(),
            metadata: serde_json::json!({ "tag": " raw " }),
        };

        let report = Trimmer::new().trim(&mut comment).unwrap();

        assert_eq!(comment.author, "ada");
        assert_eq!(comment.body, "hi");
        assert_eq!(comment.metadata["tag"], " raw ");
        assert_eq!(report.other, 1);
    }

    #[test]
    fn newtype_text_is_not_a_record() {
        let mut email = Email(" a@b.c ".to_string());

        let err = trimmer::trim_strings(&mut email).unwrap_err();

        assert_eq!(err, TrimError::InvalidType { found: NodeKind::Text });
        assert_eq!(email.0, " a@b.c ");
    }
}
