use ckit_roster::prelude::*;
use proptest::prelude::*;

fn employees() -> impl Strategy<Value = Employee> {
    (".*", ".*", 0i32..200, ".*", ".*", proptest::option::of((".*", ".*"))).prop_map(
        |(first, last, age, id, dept, addr)| Employee {
            person: Person { first, last, age },
            id,
            dept,
            addr: addr.map(|(city, zip)| Address { city, zip }),
        },
    )
}

proptest! {
    #[test]
    fn json_roundtrip_reproduces_an_equal_record(employee in employees()) {
        let json = to_json(&employee).expect("encode");
        prop_assert_eq!(from_json(&json).expect("decode"), employee);
    }
}
