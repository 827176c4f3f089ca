rpc_methods! {
    /// Active ZeroMQ notification endpoints.
    node fn get_zmq_notifications() => "getzmqnotifications";
}
