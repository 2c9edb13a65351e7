use crate::domain::{
    Field, SubscriberDetails, SubscriberEmail, SubscriberName, Validation, Violation,
};

/// New subscriber, validated and ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
    pub first_name: SubscriberName,
    pub last_name: SubscriberName,
}

impl TryFrom<SubscriberDetails> for NewSubscriber {
    type Error = Validation;

    fn try_from(value: SubscriberDetails) -> Result<Self, Self::Error> {
        let email = SubscriberEmail::parse(value.email).map_err(|e| Violation::new(Field::Email, e));
        let first_name = SubscriberName::parse(value.first_name)
            .map_err(|e| Violation::new(Field::FirstName, e));
        let last_name = SubscriberName::parse(value.last_name)
            .map_err(|e| Violation::new(Field::LastName, e));

        match (email, first_name, last_name) {
            (Ok(email), Ok(first_name), Ok(last_name)) => Ok(Self {
                email,
                first_name,
                last_name,
            }),
            (email, first_name, last_name) => Err([email.err(), first_name.err(), last_name.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}
