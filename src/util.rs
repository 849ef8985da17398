use hashbrown::HashMap;

use crate::token::MathFn;

lazy_static! {
    /// The function names the lexer recognizes, mapped to their tags.
    ///
    /// The keypad glyph `√` is handled directly by the lexer; this registry
    /// covers the spelled-out names.
    pub static ref FUNCTIONS: HashMap<String, MathFn> = {
        let mut map = HashMap::<String, MathFn>::new();
        map.insert("sin".into(), MathFn::Sin);
        map.insert("cos".into(), MathFn::Cos);
        map.insert("tan".into(), MathFn::Tan);
        map.insert("log".into(), MathFn::Log);
        map.insert("sqrt".into(), MathFn::Sqrt);
        map.shrink_to_fit();
        map
    };
}
