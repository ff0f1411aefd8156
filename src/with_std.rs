
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        io,
        iter,
        mem,
        num,
        ops,
        str,
        string,
        sync,
        vec,
    };

    pub use std::vec::Vec;

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
