pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod receipts {
        pub mod core {
            pub mod aggregate;
            pub mod evolve;
            pub mod item;
            pub mod operation_log;
            pub mod operations;
            pub mod ports;
            pub mod receipt;
            pub mod session;
            pub mod split;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod start_receipt {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod scanner_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod apply_tool_call {
                pub mod catalog;
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod response;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_receipt {
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod scanner_in_memory;
                pub mod session_store_in_memory;
                pub mod session_queries;
            }
        }
    }
}

pub mod shell;
