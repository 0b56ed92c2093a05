use crate::Element;
use folkxml_common::{Address, Family, Person, Phone};

/// Maps the typed people tree onto the generic element tree the writer
/// serializes.
///
/// Child order is fixed: firstname, lastname, addresses, phones, then
/// families; each family repeats the same shape for its own entries.
pub fn people_to_element(people: &[Person]) -> Element {
    let mut root = Element::new("people");
    for person in people {
        root.push(person_element(person));
    }
    root
}

fn person_element(person: &Person) -> Element {
    let mut element = Element::new("person");
    element.push(Element::leaf("firstname", person.firstname.as_str()));
    element.push(Element::leaf("lastname", person.lastname.as_str()));
    for address in &person.addresses {
        element.push(address_element(address));
    }
    for phone in &person.phones {
        element.push(phone_element(phone));
    }
    for family in &person.families {
        element.push(family_element(family));
    }
    element
}

fn family_element(family: &Family) -> Element {
    let mut element = Element::new("family");
    element.push(Element::leaf("name", family.name.as_str()));
    element.push(Element::leaf("born", family.born.as_str()));
    for address in &family.addresses {
        element.push(address_element(address));
    }
    for phone in &family.phones {
        element.push(phone_element(phone));
    }
    element
}

fn address_element(address: &Address) -> Element {
    let mut element = Element::new("address");
    element.push(Element::leaf("street", address.street.as_str()));
    element.push(Element::leaf("city", address.city.as_str()));
    element.push(Element::leaf("zipcode", address.zipcode.as_str()));
    element
}

fn phone_element(phone: &Phone) -> Element {
    let mut element = Element::new("phone");
    element.push(Element::leaf("mobile", phone.mobile.as_str()));
    element.push(Element::leaf("landline", phone.landline.as_str()));
    element
}
