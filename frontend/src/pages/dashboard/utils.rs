use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const CALENDAR_PATH: &str = "/dashboard/calendar";

/// Characters `encodeURIComponent` leaves untouched.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

pub fn calendar_path(leave_type: &str) -> String {
    format!("{}?leaveType={}", CALENDAR_PATH, encode_query_value(leave_type))
}

pub fn welcome_message(first_name: &str) -> String {
    format!("Welcome back, {}!", first_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_path_encodes_leave_type() {
        assert_eq!(calendar_path("SICK"), "/dashboard/calendar?leaveType=SICK");
        assert_eq!(
            calendar_path("Paid & Parental"),
            "/dashboard/calendar?leaveType=Paid%20%26%20Parental"
        );
        assert_eq!(encode_query_value("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    }

    #[test]
    fn welcome_message_uses_first_name() {
        assert_eq!(welcome_message("Jane"), "Welcome back, Jane!");
    }
}
