#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate siphasher;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        num,
        ops,
        slice,
        str,
    };

    #[cfg(test)]
    pub use siphasher::sip::SipHasher as DefaultHasher;

    pub use alloc::borrow;
    pub use alloc::string;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}
