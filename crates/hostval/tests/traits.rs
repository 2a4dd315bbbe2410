use hostval::{AccessError, ConvertError, Shared, Value};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(ConvertError: std::error::Error, Send, Sync);
assert_impl_all!(AccessError: std::error::Error, Send, Sync);
assert_not_impl_any!(Value: Send, Sync);
assert_not_impl_any!(Shared<()>: Send, Sync);
