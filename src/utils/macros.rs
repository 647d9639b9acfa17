//! Collection literals used by fixtures and proof bookkeeping.

macro_rules! hashset {
    ( $( $x:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut set = ::std::collections::HashSet::new();
            $(
                set.insert($x);
            )*
            set
        }
    }
}

macro_rules! hashmap {
    ( $( $key:expr => $val:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut map = ::std::collections::HashMap::new();
            $(
                map.insert($key, $val);
            )*
            map
        }
    }
}

macro_rules! btreeset {
    ( $( $x:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut set = ::std::collections::BTreeSet::new();
            $(
                set.insert($x);
            )*
            set
        }
    }
}

macro_rules! btreemap {
    ( $( $key:expr => $val:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut map = ::std::collections::BTreeMap::new();
            $(
                map.insert($key, $val);
            )*
            map
        }
    }
}
