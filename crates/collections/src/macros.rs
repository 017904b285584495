#[macro_export]
macro_rules! boxnode {
    ( $key: expr ) => {
        $crate::boxnode!($key, 1)
    };
    ( $key: expr, $count: expr ) => {
        Box::new($crate::node!($key, $count))
    };
}

#[macro_export]
macro_rules! node {
    ( $key: expr ) => {
        $crate::node!($key, 1)
    };
    ( $key: expr, $count: expr ) => {
        $crate::linked_list::Node {
            key: $key.into(),
            count: $count,
            next: None,
        }
    };
}
