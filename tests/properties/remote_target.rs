//! Remote spec parsing never panics and accepts what it renders.

use proptest::prelude::*;
use sitepush::RemoteTarget;

proptest! {
    #[test]
    fn parse_never_panics(spec in "\\PC{0,40}") {
        let _ = spec.parse::<RemoteTarget>();
    }

    #[test]
    fn rendered_spec_parses_back(
        user in "[a-z_][a-z0-9_-]{0,15}",
        host in "[a-z0-9][a-z0-9.-]{0,30}",
        path in "[~/]?[a-zA-Z0-9/_.-]{1,30}",
    ) {
        let target = RemoteTarget::new(&user, &host, &path).unwrap();
        let parsed: RemoteTarget = target.to_string().parse().unwrap();
        prop_assert_eq!(parsed, target);
    }
}
